//! Built-in function lowering.

use tessel_core::Builtin;

/// Integer coordinate of the fragment being shaded.
pub(super) const INDEX_EXPR: &str = "ivec2(gl_FragCoord.xy)";

/// Fragment coordinate divided by the dispatch extent.
pub(super) const NORMALIZED_INDEX_EXPR: &str = "(gl_FragCoord.xy / vec2(dispatch_size))";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Intrinsic {
    /// Call to a GLSL function with the traced arguments.
    Call(&'static str),
    /// Fixed expression taking no arguments.
    Expr(&'static str),
}

pub(super) fn intrinsic(builtin: Builtin) -> Intrinsic {
    use Intrinsic::{Call, Expr};

    match builtin {
        Builtin::Index => Expr(INDEX_EXPR),
        Builtin::NormalizedIndex => Expr(NORMALIZED_INDEX_EXPR),
        Builtin::Sin => Call("sin"),
        Builtin::Cos => Call("cos"),
        Builtin::Tan => Call("tan"),
        Builtin::ASin => Call("asin"),
        Builtin::ACos => Call("acos"),
        Builtin::ATan => Call("atan"),
        Builtin::SinH => Call("sinh"),
        Builtin::CosH => Call("cosh"),
        Builtin::TanH => Call("tanh"),
        Builtin::ASinH => Call("asinh"),
        Builtin::ACosH => Call("acosh"),
        Builtin::ATanH => Call("atanh"),
        Builtin::Pow => Call("pow"),
        Builtin::Exp => Call("exp"),
        Builtin::Log => Call("log"),
        Builtin::Exp2 => Call("exp2"),
        Builtin::Log2 => Call("log2"),
        Builtin::Sqrt => Call("sqrt"),
        Builtin::Abs => Call("abs"),
        Builtin::Sign => Call("sign"),
        Builtin::Floor => Call("floor"),
        Builtin::Ceiling => Call("ceil"),
        Builtin::Min => Call("min"),
        Builtin::Max => Call("max"),
        Builtin::Clamp => Call("clamp"),
        Builtin::IsNan => Call("isnan"),
        Builtin::IsInf => Call("isinf"),
        Builtin::Length => Call("length"),
        Builtin::Distance => Call("distance"),
        Builtin::Dot => Call("dot"),
        Builtin::Cross => Call("cross"),
        Builtin::Normalize => Call("normalize"),
    }
}
