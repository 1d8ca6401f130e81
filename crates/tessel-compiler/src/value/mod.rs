//! Value proxy layer.
//!
//! Typed handles stand in for kernel values while tracing. Operations on
//! them are methods on [`Session`](crate::Session) that append nodes to the
//! tree instead of computing anything.
//!
//! - `types`: marker types and capability traits
//! - `handle`: `Value`, `Input` and the `Operand` conversion

mod handle;
mod types;


pub(crate) use handle::Repr;
pub use handle::{Input, Operand, Traced, Value};
pub use types::*;
