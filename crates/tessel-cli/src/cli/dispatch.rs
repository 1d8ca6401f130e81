//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `From<*Params>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::glsl::GlslArgs;
use crate::commands::kernels::KernelParams;
use crate::commands::manifest::ManifestArgs;

pub struct ListParams;

impl ListParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

pub struct AstParams {
    pub kernel: String,
    pub types: bool,
    pub dot: bool,
    pub width: i32,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            kernel: parse_kernel(m),
            types: m.get_flag("types"),
            dot: m.get_flag("dot"),
            width: parse_width(m),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            kernel: p.kernel,
            params: KernelParams { width: p.width },
            types: p.types,
            dot: p.dot,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GlslParams {
    pub kernel: String,
    pub output: Option<PathBuf>,
    pub version: u32,
    pub width: i32,
}

impl GlslParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            kernel: parse_kernel(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            version: m.get_one::<u32>("glsl_version").copied().unwrap_or(330),
            width: parse_width(m),
        }
    }
}

impl From<GlslParams> for GlslArgs {
    fn from(p: GlslParams) -> Self {
        Self {
            kernel: p.kernel,
            params: KernelParams { width: p.width },
            output: p.output,
            version: p.version,
        }
    }
}

pub struct ManifestParams {
    pub kernel: String,
    pub compact: bool,
    pub width: i32,
}

impl ManifestParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            kernel: parse_kernel(m),
            compact: m.get_flag("compact"),
            width: parse_width(m),
        }
    }
}

impl From<ManifestParams> for ManifestArgs {
    fn from(p: ManifestParams) -> Self {
        Self {
            kernel: p.kernel,
            params: KernelParams { width: p.width },
            compact: p.compact,
        }
    }
}

fn parse_kernel(m: &ArgMatches) -> String {
    m.get_one::<String>("kernel").cloned().unwrap_or_default()
}

fn parse_width(m: &ArgMatches) -> i32 {
    m.get_one::<i32>("width")
        .copied()
        .unwrap_or(KernelParams::default().width)
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
