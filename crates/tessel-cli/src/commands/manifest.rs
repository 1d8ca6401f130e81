use super::kernels::{self, KernelParams};
use super::{CliError, fail};

pub struct ManifestArgs {
    pub kernel: String,
    pub params: KernelParams,
    pub compact: bool,
}

pub fn run(args: ManifestArgs) {
    match render(&args) {
        Ok(json) => println!("{json}"),
        Err(err) => fail(err),
    }
}

/// Program text and bindings as JSON.
pub fn render(args: &ManifestArgs) -> Result<String, CliError> {
    let program = kernels::find(&args.kernel)?.compile(&args.params)?;
    let json = if args.compact {
        serde_json::to_string(&program)?
    } else {
        serde_json::to_string_pretty(&program)?
    };
    Ok(json)
}
