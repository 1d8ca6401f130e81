//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose as needed.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Bundled kernel name (positional).
pub fn kernel_arg() -> Arg {
    Arg::new("kernel")
        .value_name("KERNEL")
        .required(true)
        .help("Bundled kernel name (see `tessel list`)")
}

/// Kernel size parameter (--width).
pub fn width_arg() -> Arg {
    Arg::new("width")
        .long("width")
        .value_name("N")
        .default_value("8")
        .value_parser(value_parser!(i32).range(1..))
        .help("Element count for kernels with a loop bound")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Include value types in the tree (--types).
pub fn types_arg() -> Arg {
    Arg::new("types")
        .long("types")
        .action(ArgAction::SetTrue)
        .help("Show the value type of each node")
}

/// Graphviz output (--dot).
pub fn dot_arg() -> Arg {
    Arg::new("dot")
        .long("dot")
        .action(ArgAction::SetTrue)
        .help("Print a Graphviz digraph instead of an indented tree")
}

/// Write to a file instead of stdout (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to FILE instead of stdout")
}

/// `#version` of the generated shader (--glsl-version). Shaders use
/// `layout(location)` outputs and `texelFetch`, so 330 is the floor.
pub fn glsl_version_arg() -> Arg {
    Arg::new("glsl_version")
        .long("glsl-version")
        .value_name("N")
        .default_value("330")
        .value_parser(value_parser!(u32).range(330..))
        .help("GLSL version directive (330 or later)")
}

/// Single-line JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log compiler activity to stderr (-v debug, -vv trace)")
}
