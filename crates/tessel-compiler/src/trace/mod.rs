//! Symbol and scope management.
//!
//! A [`Session`] records a kernel while host code runs against it:
//! - `session`: arena, symbol counter, block stack, sections
//! - `control`: conditionals and loops
//! - `declare`: inputs, outputs, assignment, member access
//! - `ops`: arithmetic, comparison, logical and bitwise operators
//! - `calls`: constructors, casts, built-ins, sampling
//!
//! Every builder method takes the session explicitly; there is no global
//! tracing state, so independent sessions may run on different threads.

mod calls;
mod control;
mod declare;
mod error;
mod ops;
mod session;
mod source;

#[cfg(test)]
mod control_tests;
#[cfg(test)]
mod declare_tests;
#[cfg(test)]
mod session_tests;

pub use error::TraceError;
pub use session::Session;
pub use source::Source;

/// Trace a kernel with a fresh session.
pub fn trace<F>(f: F) -> Result<Source, TraceError>
where
    F: FnOnce(&mut Session) -> Result<(), TraceError>,
{
    let mut session = Session::new();
    f(&mut session)?;
    session.finish()
}
