//! Built-in function identities.
//!
//! The tracer encodes a call as an `int` literal holding [`Builtin::id`];
//! the generator decodes it with [`Builtin::from_id`]. Identities are dense
//! and follow declaration order.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Builtin {
    Index = 0,
    NormalizedIndex,
    Sin,
    Cos,
    Tan,
    ASin,
    ACos,
    ATan,
    SinH,
    CosH,
    TanH,
    ASinH,
    ACosH,
    ATanH,
    Pow,
    Exp,
    Log,
    Exp2,
    Log2,
    Sqrt,
    Abs,
    Sign,
    Floor,
    Ceiling,
    Min,
    Max,
    Clamp,
    IsNan,
    IsInf,
    Length,
    Distance,
    Dot,
    Cross,
    Normalize,
}

impl Builtin {
    /// All built-ins, indexed by identity.
    pub const ALL: [Builtin; 34] = [
        Builtin::Index,
        Builtin::NormalizedIndex,
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Tan,
        Builtin::ASin,
        Builtin::ACos,
        Builtin::ATan,
        Builtin::SinH,
        Builtin::CosH,
        Builtin::TanH,
        Builtin::ASinH,
        Builtin::ACosH,
        Builtin::ATanH,
        Builtin::Pow,
        Builtin::Exp,
        Builtin::Log,
        Builtin::Exp2,
        Builtin::Log2,
        Builtin::Sqrt,
        Builtin::Abs,
        Builtin::Sign,
        Builtin::Floor,
        Builtin::Ceiling,
        Builtin::Min,
        Builtin::Max,
        Builtin::Clamp,
        Builtin::IsNan,
        Builtin::IsInf,
        Builtin::Length,
        Builtin::Distance,
        Builtin::Dot,
        Builtin::Cross,
        Builtin::Normalize,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn from_id(id: i32) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Index => "index",
            Builtin::NormalizedIndex => "normalized_index",
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::ASin => "asin",
            Builtin::ACos => "acos",
            Builtin::ATan => "atan",
            Builtin::SinH => "sinh",
            Builtin::CosH => "cosh",
            Builtin::TanH => "tanh",
            Builtin::ASinH => "asinh",
            Builtin::ACosH => "acosh",
            Builtin::ATanH => "atanh",
            Builtin::Pow => "pow",
            Builtin::Exp => "exp",
            Builtin::Log => "log",
            Builtin::Exp2 => "exp2",
            Builtin::Log2 => "log2",
            Builtin::Sqrt => "sqrt",
            Builtin::Abs => "abs",
            Builtin::Sign => "sign",
            Builtin::Floor => "floor",
            Builtin::Ceiling => "ceiling",
            Builtin::Min => "min",
            Builtin::Max => "max",
            Builtin::Clamp => "clamp",
            Builtin::IsNan => "is_nan",
            Builtin::IsInf => "is_inf",
            Builtin::Length => "length",
            Builtin::Distance => "distance",
            Builtin::Dot => "dot",
            Builtin::Cross => "cross",
            Builtin::Normalize => "normalize",
        }
    }

    /// Number of arguments, not counting the identity literal.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Index | Builtin::NormalizedIndex => 0,
            Builtin::Pow
            | Builtin::Min
            | Builtin::Max
            | Builtin::Distance
            | Builtin::Dot
            | Builtin::Cross => 2,
            Builtin::Clamp => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
