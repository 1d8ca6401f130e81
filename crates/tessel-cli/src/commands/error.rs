use std::path::PathBuf;

use tessel_compiler::{GenerateError, TraceError};

/// Errors reported by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown kernel `{0}` (run `tessel list` for the bundled kernels)")]
    UnknownKernel(String),

    #[error(transparent)]
    Compile(#[from] tessel_compiler::Error),

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<TraceError> for CliError {
    fn from(err: TraceError) -> Self {
        Self::Compile(err.into())
    }
}

impl From<GenerateError> for CliError {
    fn from(err: GenerateError) -> Self {
        Self::Compile(err.into())
    }
}
