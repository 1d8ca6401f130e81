//! Marker types and the capability traits that type-check traced operations.
//!
//! Markers are never instantiated; they only parameterize [`Value`] and
//! [`Input`] handles. An operation the target language rejects (adding a
//! bool, sampling with a float index, writing a buffer) has no impl here
//! and so fails to compile on the host side.
//!
//! [`Value`]: super::Value
//! [`Input`]: super::Input

use std::marker::PhantomData;

use tessel_core::ValueType;

/// A traced value type with a fixed [`ValueType`] tag.
pub trait ShaderType: 'static {
    const TYPE: ValueType;
}

macro_rules! markers {
    ($($(#[$doc:meta])* $name:ident => $ty:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            pub enum $name {}

            impl ShaderType for $name {
                const TYPE: ValueType = ValueType::$ty;
            }
        )*
    };
}

markers! {
    Bool => BOOL;
    Int => INT;
    UInt => UINT;
    Float => FLOAT;
    Int2 => INT2;
    UInt2 => UINT2;
    Float2 => FLOAT2;
    Int3 => INT3;
    UInt3 => UINT3;
    Float3 => FLOAT3;
    Int4 => INT4;
    UInt4 => UINT4;
    Float4 => FLOAT4;
}

/// One-dimensional buffer of `T`, readable by linear index.
pub struct Buffer1D<T>(PhantomData<fn() -> T>);

/// Two-dimensional buffer of `T`, readable by (x, y).
pub struct Buffer2D<T>(PhantomData<fn() -> T>);

impl<T: Element> ShaderType for Buffer1D<T> {
    const TYPE: ValueType = ValueType::buffer_1d(T::TYPE);
}

impl<T: Element> ShaderType for Buffer2D<T> {
    const TYPE: ValueType = ValueType::buffer_2d(T::TYPE);
}

/// Single-lane types.
pub trait Scalar: ShaderType {}

/// Int, uint and float scalars and vectors.
pub trait Numeric: ShaderType {}

/// Types that may be stored in a buffer.
pub trait Element: Numeric {}

/// Types a const input may have.
pub trait InputType: ShaderType {}

/// Types an output may have.
pub trait OutputType: Numeric {}

/// Float scalars and vectors (`genType`).
pub trait FloatGen: Numeric {}

/// Int and float scalars and vectors.
pub trait SignedGen: Numeric {}

/// Int and uint scalars.
pub trait Integral: Scalar {}

/// Vectors with addressable lanes.
pub trait VectorType: ShaderType {
    type Lane: Scalar;
    const LANES: u8;
}

/// Vectors with a third lane.
pub trait HasZ: VectorType {}

/// Vectors with a fourth lane.
pub trait HasW: HasZ {}

pub trait Vector2: VectorType {}
pub trait Vector3: VectorType {}
pub trait Vector4: VectorType {}

macro_rules! impl_marker {
    ($tr:ident: $($ty:ty),* $(,)?) => {
        $(impl $tr for $ty {})*
    };
}

impl_marker!(Scalar: Bool, Int, UInt, Float);
impl_marker!(Numeric: Int, UInt, Float, Int2, UInt2, Float2, Int3, UInt3, Float3, Int4, UInt4, Float4);
impl_marker!(Element: Int, UInt, Float, Int2, UInt2, Float2, Int3, UInt3, Float3, Int4, UInt4, Float4);
impl_marker!(OutputType: Int, UInt, Float, Int2, UInt2, Float2, Int3, UInt3, Float3, Int4, UInt4, Float4);
impl_marker!(InputType: Bool, Int, UInt, Float, Int2, UInt2, Float2, Int3, UInt3, Float3, Int4, UInt4, Float4);
impl_marker!(FloatGen: Float, Float2, Float3, Float4);
impl_marker!(SignedGen: Int, Float, Int2, Float2, Int3, Float3, Int4, Float4);
impl_marker!(Integral: Int, UInt);
impl_marker!(HasZ: Int3, UInt3, Float3, Int4, UInt4, Float4);
impl_marker!(HasW: Int4, UInt4, Float4);
impl_marker!(Vector2: Int2, UInt2, Float2);
impl_marker!(Vector3: Int3, UInt3, Float3);
impl_marker!(Vector4: Int4, UInt4, Float4);

impl<T: Element> InputType for Buffer1D<T> {}
impl<T: Element> InputType for Buffer2D<T> {}

macro_rules! impl_vector {
    ($($ty:ident: $lane:ident x $n:literal),* $(,)?) => {
        $(impl VectorType for $ty {
            type Lane = $lane;
            const LANES: u8 = $n;
        })*
    };
}

impl_vector! {
    Int2: Int x 2, UInt2: UInt x 2, Float2: Float x 2,
    Int3: Int x 3, UInt3: UInt x 3, Float3: Float x 3,
    Int4: Int x 4, UInt4: UInt x 4, Float4: Float x 4,
}

// ============================================================================
// Operator relations
// ============================================================================

/// `+ - * /` between `Self` and `Rhs`.
pub trait Arith<Rhs: ShaderType>: ShaderType {
    type Output: ShaderType;
}

/// `*` between `Self` and `Rhs`. Every [`Arith`] pair, plus int vectors
/// scaled by a float (either side), which GLSL converts implicitly.
pub trait Product<Rhs: ShaderType>: ShaderType {
    type Output: ShaderType;
}

/// `/` between `Self` and `Rhs`. Every [`Arith`] pair, plus int vectors
/// divided by a float.
pub trait Quotient<Rhs: ShaderType>: ShaderType {
    type Output: ShaderType;
}

/// `%` between integer operands.
pub trait Modulo<Rhs: ShaderType>: ShaderType {
    type Output: ShaderType;
}

/// `==` and `!=`.
pub trait Equality<Rhs: ShaderType>: ShaderType {}

/// `< <= > >=`.
pub trait Ordered<Rhs: ShaderType>: ShaderType {}

/// `& | ^`.
pub trait Bitwise<Rhs: ShaderType>: ShaderType {}

/// `<< >>`; the result has the left operand's type.
pub trait Shift<Rhs: ShaderType>: ShaderType {}

/// Explicit conversion to `T`.
pub trait CastTo<T: ShaderType>: ShaderType {}

macro_rules! arith {
    ($($lhs:ident, $rhs:ident => $out:ident;)*) => {
        $(
            impl Arith<$rhs> for $lhs {
                type Output = $out;
            }
            impl Product<$rhs> for $lhs {
                type Output = $out;
            }
            impl Quotient<$rhs> for $lhs {
                type Output = $out;
            }
        )*
    };
}

arith! {
    Int, Int => Int;
    UInt, UInt => UInt;
    Float, Float => Float;
    Int2, Int2 => Int2;
    UInt2, UInt2 => UInt2;
    Float2, Float2 => Float2;
    Int3, Int3 => Int3;
    UInt3, UInt3 => UInt3;
    Float3, Float3 => Float3;
    Int4, Int4 => Int4;
    UInt4, UInt4 => UInt4;
    Float4, Float4 => Float4;
    Int2, Int => Int2;
    UInt2, UInt => UInt2;
    Float2, Float => Float2;
    Int3, Int => Int3;
    UInt3, UInt => UInt3;
    Float3, Float => Float3;
    Int4, Int => Int4;
    UInt4, UInt => UInt4;
    Float4, Float => Float4;
    Int, Int2 => Int2;
    UInt, UInt2 => UInt2;
    Float, Float2 => Float2;
    Int, Int3 => Int3;
    UInt, UInt3 => UInt3;
    Float, Float3 => Float3;
    Int, Int4 => Int4;
    UInt, UInt4 => UInt4;
    Float, Float4 => Float4;
}

macro_rules! scaled {
    ($tr:ident: $($lhs:ident, $rhs:ident => $out:ident;)*) => {
        $(impl $tr<$rhs> for $lhs {
            type Output = $out;
        })*
    };
}

scaled! { Product:
    Int2, Float => Float2;
    Int3, Float => Float3;
    Int4, Float => Float4;
    Float, Int2 => Float2;
    Float, Int3 => Float3;
    Float, Int4 => Float4;
}

scaled! { Quotient:
    Int2, Float => Float2;
    Int3, Float => Float3;
    Int4, Float => Float4;
}

macro_rules! modulo {
    ($($lhs:ident, $rhs:ident => $out:ident;)*) => {
        $(impl Modulo<$rhs> for $lhs {
            type Output = $out;
        })*
    };
}

modulo! {
    Int, Int => Int;
    UInt, UInt => UInt;
    Int2, Int2 => Int2;
    UInt2, UInt2 => UInt2;
    Int3, Int3 => Int3;
    UInt3, UInt3 => UInt3;
    Int4, Int4 => Int4;
    UInt4, UInt4 => UInt4;
    Int2, Int => Int2;
    UInt2, UInt => UInt2;
    Int3, Int => Int3;
    UInt3, UInt => UInt3;
    Int4, Int => Int4;
    UInt4, UInt => UInt4;
}

macro_rules! relation {
    ($tr:ident: $($lhs:ident, $rhs:ident;)*) => {
        $(impl $tr<$rhs> for $lhs {})*
    };
}

relation! { Equality:
    Bool, Bool;
    Int, Int;
    UInt, UInt;
    Float, Float;
}

relation! { Ordered:
    Int, Int;
    UInt, UInt;
    Float, Float;
}

relation! { Bitwise:
    Int, Int;
    UInt, UInt;
}

relation! { Shift:
    Int, Int;
    Int, UInt;
    UInt, UInt;
    UInt, Int;
}

relation! { CastTo:
    Int, Float;
    Int, UInt;
    UInt, Float;
    UInt, Int;
    Float, Int;
    Float, UInt;
    Int2, Float2;
    Int2, UInt2;
    UInt2, Float2;
    UInt2, Int2;
    Float2, Int2;
    Float2, UInt2;
    Int3, Float3;
    Int3, UInt3;
    UInt3, Float3;
    UInt3, Int3;
    Float3, Int3;
    Float3, UInt3;
    Int4, Float4;
    Int4, UInt4;
    UInt4, Float4;
    UInt4, Int4;
    Float4, Int4;
    Float4, UInt4;
}
