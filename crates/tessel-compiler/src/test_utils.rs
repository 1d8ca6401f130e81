//! Test helpers: trace a kernel and render it.

use crate::trace::{Session, Source, TraceError, trace};
use crate::value::Float;

/// Trace `f`, panicking on failure.
pub fn traced(f: impl FnOnce(&mut Session) -> Result<(), TraceError>) -> Source {
    match trace(f) {
        Ok(source) => source,
        Err(err) => panic!("trace failed: {err}"),
    }
}

/// Typed tree dump of the traced kernel.
pub fn ast_of(f: impl FnOnce(&mut Session) -> Result<(), TraceError>) -> String {
    traced(f).dump()
}

/// Generated GLSL of the traced kernel.
pub fn glsl_of(f: impl FnOnce(&mut Session) -> Result<(), TraceError>) -> String {
    match crate::codegen::generate(&traced(f)) {
        Ok(program) => program.source().to_string(),
        Err(err) => panic!("generation failed: {err}"),
    }
}

/// `total = a + 1.0 + ... + 1.0` with `depth` additions nested to the left.
pub fn left_deep_sum(s: &mut Session, depth: usize) -> Result<(), TraceError> {
    let a = s.const_data(|s| s.input::<Float>("a"))?;
    let mut total = s.out_data(|s| s.output::<Float>("total"))?;
    s.main(|s| {
        let mut sum = s.add(a, 1.0f32)?;
        for _ in 1..depth {
            sum = s.add(sum, 1.0f32)?;
        }
        s.assign(&mut total, sum)
    })
}
