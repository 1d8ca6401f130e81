//! Identifiers and type spellings.

use tessel_core::{ScalarKind, ValueType, utils};

use crate::ast::SymbolId;

/// Uniform carrying the dispatch extent for normalized coordinates.
pub(super) const DISPATCH_SIZE: &str = "dispatch_size";

/// Words a user name may not take verbatim: GLSL 3.30 keywords, reserved
/// words, type names, the functions the generator calls, and names the
/// generator defines itself.
#[rustfmt::skip]
const RESERVED: &[&str] = &[
    // keywords
    "attribute", "const", "uniform", "varying", "layout", "centroid", "flat", "smooth",
    "noperspective", "break", "continue", "do", "for", "while", "switch", "case", "default",
    "if", "else", "in", "out", "inout", "true", "false", "invariant", "discard", "return",
    "struct", "precision", "lowp", "mediump", "highp",
    // types
    "void", "bool", "int", "uint", "float", "vec2", "vec3", "vec4", "bvec2", "bvec3",
    "bvec4", "ivec2", "ivec3", "ivec4", "uvec2", "uvec3", "uvec4", "mat2", "mat3", "mat4",
    "mat2x2", "mat2x3", "mat2x4", "mat3x2", "mat3x3", "mat3x4", "mat4x2", "mat4x3", "mat4x4",
    "sampler1D", "sampler2D", "sampler3D", "samplerCube", "sampler1DShadow",
    "sampler2DShadow", "samplerCubeShadow", "sampler1DArray", "sampler2DArray",
    "sampler1DArrayShadow", "sampler2DArrayShadow", "isampler1D", "isampler2D",
    "isampler3D", "isamplerCube", "isampler1DArray", "isampler2DArray", "usampler1D",
    "usampler2D", "usampler3D", "usamplerCube", "usampler1DArray", "usampler2DArray",
    "sampler2DRect", "sampler2DRectShadow", "isampler2DRect", "usampler2DRect",
    "samplerBuffer", "isamplerBuffer", "usamplerBuffer", "sampler2DMS", "isampler2DMS",
    "usampler2DMS", "sampler2DMSArray", "isampler2DMSArray", "usampler2DMSArray",
    // reserved for future use
    "common", "partition", "active", "asm", "class", "union", "enum", "typedef", "template",
    "this", "packed", "goto", "inline", "noinline", "volatile", "public", "static", "extern",
    "external", "interface", "long", "short", "double", "half", "fixed", "unsigned",
    "superp", "input", "output", "hvec2", "hvec3", "hvec4", "dvec2", "dvec3", "dvec4",
    "fvec2", "fvec3", "fvec4", "sampler3DRect", "filter", "image1D", "image2D", "image3D",
    "imageCube", "iimage1D", "iimage2D", "iimage3D", "iimageCube", "uimage1D", "uimage2D",
    "uimage3D", "uimageCube", "image1DArray", "image2DArray", "iimage1DArray",
    "iimage2DArray", "uimage1DArray", "uimage2DArray", "image1DShadow", "image2DShadow",
    "image1DArrayShadow", "image2DArrayShadow", "imageBuffer", "iimageBuffer",
    "uimageBuffer", "sizeof", "cast", "namespace", "using", "row_major",
    // functions the generator calls
    "texelFetch", "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh",
    "asinh", "acosh", "atanh", "pow", "exp", "log", "exp2", "log2", "sqrt", "abs", "sign",
    "floor", "ceil", "min", "max", "clamp", "isnan", "isinf", "length", "distance", "dot",
    "cross", "normalize",
    // generator-defined
    "main", DISPATCH_SIZE,
];

pub(super) fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// Identifier emitted for a user-declared input or output.
///
/// Names that would collide with the language or with generated locals get
/// a trailing underscore; everything else is kept verbatim.
pub(super) fn ident_for(name: &str) -> String {
    if is_reserved(name) || utils::is_local_name(name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// Identifier of a generated local.
pub(super) fn local_name(symbol: SymbolId) -> String {
    format!("v{}", symbol.as_u32())
}

/// GLSL spelling of a value or buffer type.
pub(super) fn type_name(ty: ValueType) -> Option<&'static str> {
    if !ty.is_valid() {
        return None;
    }
    if ty.is_buffer() {
        let kind = ty.scalar_kind()?;
        return match (ty.is_buffer_1d(), kind) {
            (true, ScalarKind::Int) => Some("isamplerBuffer"),
            (true, ScalarKind::UInt) => Some("usamplerBuffer"),
            (true, ScalarKind::Float) => Some("samplerBuffer"),
            (false, ScalarKind::Int) => Some("isampler2DRect"),
            (false, ScalarKind::UInt) => Some("usampler2DRect"),
            (false, ScalarKind::Float) => Some("sampler2DRect"),
            (_, ScalarKind::Bool) => None,
        };
    }
    match ty {
        ValueType::BOOL => Some("bool"),
        ValueType::INT => Some("int"),
        ValueType::UINT => Some("uint"),
        ValueType::FLOAT => Some("float"),
        ValueType::INT2 => Some("ivec2"),
        ValueType::UINT2 => Some("uvec2"),
        ValueType::FLOAT2 => Some("vec2"),
        ValueType::INT3 => Some("ivec3"),
        ValueType::UINT3 => Some("uvec3"),
        ValueType::FLOAT3 => Some("vec3"),
        ValueType::INT4 => Some("ivec4"),
        ValueType::UINT4 => Some("uvec4"),
        ValueType::FLOAT4 => Some("vec4"),
        _ => None,
    }
}

/// Swizzle narrowing a fetched `vec4` texel to an element of `lanes` lanes.
pub(super) fn texel_swizzle(lanes: u8) -> &'static str {
    match lanes {
        1 => ".x",
        2 => ".xy",
        3 => ".xyz",
        _ => "",
    }
}
