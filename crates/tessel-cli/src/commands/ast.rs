use super::kernels::{self, KernelParams};
use super::{CliError, fail};

pub struct AstArgs {
    pub kernel: String,
    pub params: KernelParams,
    pub types: bool,
    pub dot: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    match render(&args) {
        Ok(text) => print!("{text}"),
        Err(err) => fail(err),
    }
}

/// Traced tree of the kernel, as text or as a Graphviz digraph.
pub fn render(args: &AstArgs) -> Result<String, CliError> {
    let source = kernels::find(&args.kernel)?.trace(&args.params)?;
    let printer = source.printer().with_types(args.types);
    if args.dot {
        return Ok(printer.dump_dot());
    }
    Ok(printer.colored(args.color).dump())
}
