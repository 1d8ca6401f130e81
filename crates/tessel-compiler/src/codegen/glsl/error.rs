use tessel_core::{Builtin, ValueType};

use crate::ast::{NodeId, NodeKind, SymbolId};

/// Reasons a traced tree cannot be turned into GLSL.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    #[error("root {node} is {kind}, expected Program")]
    NotAProgram { node: NodeId, kind: NodeKind },

    #[error("program has no Main section")]
    MissingMain,

    #[error("{kind} section {node} appears more than once")]
    DuplicateSection { node: NodeId, kind: NodeKind },

    #[error("{kind} node {node} is not allowed as {context}")]
    UnexpectedNode {
        node: NodeId,
        kind: NodeKind,
        context: &'static str,
    },

    #[error("{kind} node {node} has {found} children")]
    MalformedNode {
        node: NodeId,
        kind: NodeKind,
        found: usize,
    },

    #[error("declaration {node} has no name")]
    MissingName { node: NodeId },

    #[error("`{name}` is declared more than once")]
    DuplicateName { name: String },

    #[error("input `{name}` has unsupported type {ty}")]
    InvalidInputType { name: String, ty: ValueType },

    #[error("output `{name}` has unsupported type {ty}")]
    InvalidOutputType { name: String, ty: ValueType },

    #[error("node {node} uses {ty}, which has no GLSL spelling")]
    UnsupportedType { node: NodeId, ty: ValueType },

    #[error("node {node} references {symbol}, which is not declared in an enclosing scope")]
    UndeclaredSymbol { node: NodeId, symbol: SymbolId },

    #[error("node {node} assigns to input {symbol}")]
    AssignToInput { node: NodeId, symbol: SymbolId },

    #[error("node {node} calls unknown built-in {id}")]
    UnknownBuiltin { node: NodeId, id: i32 },

    #[error("{builtin} at {node} takes {expected} arguments, got {found}")]
    BuiltinArity {
        node: NodeId,
        builtin: Builtin,
        expected: usize,
        found: usize,
    },

    #[error("{kind} node {node} does not follow If or ElseIf")]
    DanglingElse { node: NodeId, kind: NodeKind },
}
