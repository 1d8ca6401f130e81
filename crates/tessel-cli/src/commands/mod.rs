pub mod ast;
pub mod glsl;
pub mod kernels;
pub mod list;
pub mod manifest;

mod error;


use std::path::Path;

pub use error::CliError;

/// Print `err` and exit with status 1.
pub fn fail(err: CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

/// Write `text` to `path`, replacing any previous content.
pub fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    std::fs::write(path, text).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
