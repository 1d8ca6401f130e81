//! GLSL 3.30 fragment-shader generation.
//!
//! Each kernel becomes one fragment shader: const inputs become uniforms,
//! outputs become numbered `out` targets, and the traced `Main` section
//! becomes `main()`. The fragment coordinate stands for the element index.

mod config;
mod emitter;
mod error;
mod expr;
mod intrinsics;
mod naming;
mod stmt;

#[cfg(test)]
mod emitter_tests;
#[cfg(test)]
mod naming_tests;

pub use config::Config;
pub use emitter::Emitter;
pub use error::GenerateError;

use crate::program::Program;
use crate::trace::Source;

/// Generate GLSL with default configuration.
pub fn generate(source: &Source) -> Result<Program, GenerateError> {
    generate_with_config(source, Config::default())
}

/// Generate GLSL with custom configuration.
pub fn generate_with_config(source: &Source, config: Config) -> Result<Program, GenerateError> {
    Emitter::new(source, config).emit()
}
