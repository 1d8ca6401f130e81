use std::path::PathBuf;

use tessel_compiler::Program;
use tessel_compiler::codegen::{Config, generate_with_config};

use super::kernels::{self, KernelParams};
use super::{CliError, fail, write_output};

pub struct GlslArgs {
    pub kernel: String,
    pub params: KernelParams,
    pub output: Option<PathBuf>,
    pub version: u32,
}

pub fn run(args: GlslArgs) {
    if let Err(err) = execute(&args) {
        fail(err);
    }
}

/// Generate the shader and write it to the output file or stdout.
pub fn execute(args: &GlslArgs) -> Result<(), CliError> {
    let program = generate(args)?;
    match &args.output {
        Some(path) => {
            write_output(path, program.source())?;
            tracing::info!(path = %path.display(), "wrote shader");
        }
        None => print!("{}", program.source()),
    }
    Ok(())
}

pub fn generate(args: &GlslArgs) -> Result<Program, CliError> {
    let source = kernels::find(&args.kernel)?.trace(&args.params)?;
    let config = Config::new().version(args.version);
    Ok(generate_with_config(&source, config)?)
}
