//! Configuration for GLSL emission.

/// Configuration for GLSL emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Value of the `#version` directive
    pub(crate) version: u32,
    /// Spaces per indentation level
    pub(crate) indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 330,
            indent: 4,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `#version` directive.
    pub fn version(mut self, value: u32) -> Self {
        self.version = value;
        self
    }

    /// Set the number of spaces per indentation level.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }
}
