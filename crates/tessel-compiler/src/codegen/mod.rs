//! Code generation from a finished trace.
//!
//! - `glsl`: GLSL 3.30 fragment-shader backend

pub mod glsl;

pub use glsl::{Config, GenerateError, generate, generate_with_config};
