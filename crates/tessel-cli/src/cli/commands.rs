//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tessel")
        .about("Trace GPGPU kernels and compile them to GLSL")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(list_command())
        .subcommand(ast_command())
        .subcommand(glsl_command())
        .subcommand(manifest_command())
}

/// List bundled kernels.
pub fn list_command() -> Command {
    Command::new("list").about("List bundled kernels")
}

/// Show the traced tree of a kernel.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the traced AST of a kernel")
        .override_usage(
            "\
  tessel ast <KERNEL> [--types] [--dot]",
        )
        .after_help(
            r#"EXAMPLES:
  tessel ast add-constant             # indented tree
  tessel ast sigmoid --types          # with value types
  tessel ast xorshift --dot | dot -Tsvg > xorshift.svg"#,
        )
        .arg(kernel_arg())
        .arg(types_arg())
        .arg(dot_arg())
        .arg(width_arg())
        .arg(color_arg())
}

/// Generate the fragment shader of a kernel.
pub fn glsl_command() -> Command {
    Command::new("glsl")
        .about("Generate GLSL for a kernel")
        .override_usage(
            "\
  tessel glsl <KERNEL> [-o FILE]",
        )
        .after_help(
            r#"EXAMPLES:
  tessel glsl add-constant                    # print to stdout
  tessel glsl sum-range --width 64            # loop over 64 elements
  tessel glsl uv --glsl-version 400 -o uv.frag"#,
        )
        .arg(kernel_arg())
        .arg(output_arg())
        .arg(glsl_version_arg())
        .arg(width_arg())
}

/// Emit the program manifest of a kernel as JSON.
pub fn manifest_command() -> Command {
    Command::new("manifest")
        .about("Print the compiled program and its bindings as JSON")
        .override_usage(
            "\
  tessel manifest <KERNEL> [--compact]",
        )
        .after_help(
            r#"EXAMPLES:
  tessel manifest cross-entropy               # pretty JSON
  tessel manifest xorshift --compact | jq .inputs"#,
        )
        .arg(kernel_arg())
        .arg(compact_arg())
        .arg(width_arg())
}
