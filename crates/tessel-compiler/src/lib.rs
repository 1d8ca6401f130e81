//! Tessel compiler: trace-time AST builder and GLSL generator.
//!
//! Host code describes a kernel by calling builder methods on a
//! [`Session`]; the calls are recorded, not evaluated. The recording is
//! then lowered to a fragment shader:
//! - `value` - typed value handles and the type relations between them
//! - `trace` - symbol and scope management, operators, built-ins
//! - `ast` - arena AST, node kinds, tree dumps
//! - `codegen` - GLSL emission
//! - `program` - shader text plus binding manifest

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod codegen;
pub mod program;
pub mod trace;
pub mod value;

#[cfg(test)]
pub mod test_utils;

pub use codegen::GenerateError;
pub use program::{InputBinding, OutputBinding, Program};
pub use trace::{Session, Source, TraceError, trace};
pub use value::{Input, Operand, Value};

/// Errors that can occur while compiling a kernel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("trace failed: {0}")]
    Trace(#[from] TraceError),

    #[error("code generation failed: {0}")]
    Generate(#[from] GenerateError),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Trace a kernel and generate its program.
pub fn compile<F>(f: F) -> Result<Program>
where
    F: FnOnce(&mut Session) -> std::result::Result<(), TraceError>,
{
    let source = trace(f)?;
    Ok(codegen::generate(&source)?)
}
