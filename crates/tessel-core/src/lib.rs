#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data for the Tessel kernel compiler.
//!
//! - `ValueType`: closed bitmask of value types (scalars, vectors, buffers)
//! - `Builtin`: built-in function identities shared by tracer and generator
//! - `utils`: identifier helpers
//! - `Style`: role-based terminal styling for tree dumps

mod builtin;
pub mod utils;
mod style;
mod value_type;


pub use builtin::Builtin;
pub use style::{Painted, Role, Style};
pub use value_type::{ScalarKind, ValueType};
