//! Compiled program artifact.
//!
//! A [`Program`] is the shader text plus the manifest a host runtime needs
//! to bind it: where each input uniform lives and which render target each
//! output is written to. It is immutable once generated.

use serde::Serialize;
use tessel_core::ValueType;

/// Const input bound as a uniform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InputBinding {
    /// Name given at declaration.
    pub name: String,
    /// Identifier in the shader text; differs from `name` when mangled.
    pub ident: String,
    #[serde(rename = "type")]
    pub ty: ValueType,
    /// Declaration position; buffers are bound to texture unit `slot`.
    pub slot: u32,
}

/// Output written to a render target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputBinding {
    pub name: String,
    pub ident: String,
    #[serde(rename = "type")]
    pub ty: ValueType,
    /// `layout(location = ...)` of the target.
    pub location: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Program {
    source: String,
    inputs: Vec<InputBinding>,
    outputs: Vec<OutputBinding>,
}

impl Program {
    pub(crate) fn new(
        source: String,
        inputs: Vec<InputBinding>,
        outputs: Vec<OutputBinding>,
    ) -> Self {
        Self {
            source,
            inputs,
            outputs,
        }
    }

    /// Shader text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Inputs in declaration order.
    pub fn inputs(&self) -> &[InputBinding] {
        &self.inputs
    }

    /// Outputs in declaration order.
    pub fn outputs(&self) -> &[OutputBinding] {
        &self.outputs
    }

    pub fn input(&self, name: &str) -> Option<&InputBinding> {
        self.inputs.iter().find(|input| input.name == name)
    }

    pub fn output(&self, name: &str) -> Option<&OutputBinding> {
        self.outputs.iter().find(|output| output.name == name)
    }
}
