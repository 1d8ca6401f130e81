//! AST node model.
//!
//! Nodes live in an index arena (`Ast`) and reference their children by
//! `NodeId`. Each child has exactly one parent, so a finished trace is a
//! single rooted tree with no sharing.
//!
//! - `kind`: the closed node kind set and its arity table
//! - `node`: payloads, symbols, lanes and the node record
//! - `arena`: storage, attachment rules, cloning, traversal
//! - `printer`: indented and DOT dumps

mod arena;
mod kind;
mod node;
mod printer;

#[cfg(test)]
mod arena_tests;

pub use arena::{Ast, AstError, NodeId, Preorder};
pub use kind::{Arity, NodeKind};
pub use node::{Lane, LiteralValue, Node, Payload, SymbolId};
pub use printer::AstPrinter;
