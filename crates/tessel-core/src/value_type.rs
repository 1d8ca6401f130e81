//! Value type tags.
//!
//! Each base type owns one bit, so compatibility checks are mask tests.
//! Bits 30 and 31 mark one- and two-dimensional buffers; a buffer type is
//! its buffer bit ORed with the element type.

use std::fmt;

/// Scalar category of a type's lanes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int,
    UInt,
    Float,
}

impl ScalarKind {
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::UInt => "uint",
            ScalarKind::Float => "float",
        }
    }
}

/// Bitmask type tag of a traced value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ValueType(u32);

impl ValueType {
    pub const VOID: Self = Self(1 << 0);
    pub const BOOL: Self = Self(1 << 1);
    pub const INT: Self = Self(1 << 2);
    pub const UINT: Self = Self(1 << 3);
    pub const FLOAT: Self = Self(1 << 4);
    pub const INT2: Self = Self(1 << 5);
    pub const UINT2: Self = Self(1 << 6);
    pub const FLOAT2: Self = Self(1 << 7);
    pub const INT3: Self = Self(1 << 8);
    pub const UINT3: Self = Self(1 << 9);
    pub const FLOAT3: Self = Self(1 << 10);
    pub const INT4: Self = Self(1 << 11);
    pub const UINT4: Self = Self(1 << 12);
    pub const FLOAT4: Self = Self(1 << 13);

    /// Marker bit for one-dimensional buffers.
    pub const BUFFER_1D_BIT: u32 = 1 << 30;
    /// Marker bit for two-dimensional buffers.
    pub const BUFFER_2D_BIT: u32 = 1 << 31;

    const BASE_MASK: u32 = (1 << 14) - 1;
    const BUFFER_MASK: u32 = Self::BUFFER_1D_BIT | Self::BUFFER_2D_BIT;
    const ELEMENT_MASK: u32 = Self::BASE_MASK & !(Self::VOID.0 | Self::BOOL.0);

    /// Every non-buffer type, in bit order.
    pub const BASE_TYPES: [ValueType; 14] = [
        Self::VOID,
        Self::BOOL,
        Self::INT,
        Self::UINT,
        Self::FLOAT,
        Self::INT2,
        Self::UINT2,
        Self::FLOAT2,
        Self::INT3,
        Self::UINT3,
        Self::FLOAT3,
        Self::INT4,
        Self::UINT4,
        Self::FLOAT4,
    ];

    /// Reinterpret raw bits, rejecting combinations outside the closed set.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        let ty = Self(bits);
        if ty.is_valid() { Some(ty) } else { None }
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// One-dimensional buffer over `element`.
    ///
    /// The result is only valid when `element` is an int, uint or float
    /// scalar or vector; check with [`ValueType::is_valid`].
    pub const fn buffer_1d(element: Self) -> Self {
        Self((element.0 & Self::BASE_MASK) | Self::BUFFER_1D_BIT)
    }

    /// Two-dimensional buffer over `element`.
    pub const fn buffer_2d(element: Self) -> Self {
        Self((element.0 & Self::BASE_MASK) | Self::BUFFER_2D_BIT)
    }

    /// Vector (or scalar, for one lane) of the given kind.
    pub const fn vector(kind: ScalarKind, lanes: u8) -> Option<Self> {
        let ty = match (kind, lanes) {
            (ScalarKind::Bool, 1) => Self::BOOL,
            (ScalarKind::Int, 1) => Self::INT,
            (ScalarKind::UInt, 1) => Self::UINT,
            (ScalarKind::Float, 1) => Self::FLOAT,
            (ScalarKind::Int, 2) => Self::INT2,
            (ScalarKind::UInt, 2) => Self::UINT2,
            (ScalarKind::Float, 2) => Self::FLOAT2,
            (ScalarKind::Int, 3) => Self::INT3,
            (ScalarKind::UInt, 3) => Self::UINT3,
            (ScalarKind::Float, 3) => Self::FLOAT3,
            (ScalarKind::Int, 4) => Self::INT4,
            (ScalarKind::UInt, 4) => Self::UINT4,
            (ScalarKind::Float, 4) => Self::FLOAT4,
            _ => return None,
        };
        Some(ty)
    }

    /// Exactly one base bit, at most one buffer bit, and buffers only over
    /// numeric elements.
    pub const fn is_valid(self) -> bool {
        let base = self.0 & Self::BASE_MASK;
        let buffer = self.0 & Self::BUFFER_MASK;
        if self.0 & !(Self::BASE_MASK | Self::BUFFER_MASK) != 0 {
            return false;
        }
        if base.count_ones() != 1 {
            return false;
        }
        match buffer {
            0 => true,
            Self::BUFFER_1D_BIT | Self::BUFFER_2D_BIT => base & Self::ELEMENT_MASK != 0,
            _ => false,
        }
    }

    /// Element type for buffers, the type itself otherwise.
    pub const fn base(self) -> Self {
        Self(self.0 & Self::BASE_MASK)
    }

    /// Shared-bit test used for type compatibility checks.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_buffer(self) -> bool {
        self.0 & Self::BUFFER_MASK != 0
    }

    pub const fn is_buffer_1d(self) -> bool {
        self.0 & Self::BUFFER_1D_BIT != 0
    }

    pub const fn is_buffer_2d(self) -> bool {
        self.0 & Self::BUFFER_2D_BIT != 0
    }

    pub const fn is_void(self) -> bool {
        self.0 == Self::VOID.0
    }

    pub fn is_scalar(self) -> bool {
        !self.is_buffer() && self.lanes() == 1
    }

    pub fn is_vector(self) -> bool {
        !self.is_buffer() && self.lanes() > 1
    }

    /// Scalar kind of the lanes; `None` for void.
    pub fn scalar_kind(self) -> Option<ScalarKind> {
        let base = self.base();
        if base == Self::BOOL {
            Some(ScalarKind::Bool)
        } else if base.intersects(Self(
            Self::INT.0 | Self::INT2.0 | Self::INT3.0 | Self::INT4.0,
        )) {
            Some(ScalarKind::Int)
        } else if base.intersects(Self(
            Self::UINT.0 | Self::UINT2.0 | Self::UINT3.0 | Self::UINT4.0,
        )) {
            Some(ScalarKind::UInt)
        } else if base.intersects(Self(
            Self::FLOAT.0 | Self::FLOAT2.0 | Self::FLOAT3.0 | Self::FLOAT4.0,
        )) {
            Some(ScalarKind::Float)
        } else {
            None
        }
    }

    /// Number of lanes of the base type (0 for void).
    pub fn lanes(self) -> u8 {
        let base = self.base().0;
        if base & (Self::BOOL.0 | Self::INT.0 | Self::UINT.0 | Self::FLOAT.0) != 0 {
            1
        } else if base & (Self::INT2.0 | Self::UINT2.0 | Self::FLOAT2.0) != 0 {
            2
        } else if base & (Self::INT3.0 | Self::UINT3.0 | Self::FLOAT3.0) != 0 {
            3
        } else if base & (Self::INT4.0 | Self::UINT4.0 | Self::FLOAT4.0) != 0 {
            4
        } else {
            0
        }
    }

    /// Scalar type of a single lane (`FLOAT3` -> `FLOAT`).
    pub fn lane(self) -> Option<Self> {
        Self::vector(self.scalar_kind()?, 1)
    }

    /// Name of the base type (`float`, `uint3`); buffers use their element.
    pub fn base_name(self) -> &'static str {
        match self.base() {
            Self::VOID => "void",
            Self::BOOL => "bool",
            Self::INT => "int",
            Self::UINT => "uint",
            Self::FLOAT => "float",
            Self::INT2 => "int2",
            Self::UINT2 => "uint2",
            Self::FLOAT2 => "float2",
            Self::INT3 => "int3",
            Self::UINT3 => "uint3",
            Self::FLOAT3 => "float3",
            Self::INT4 => "int4",
            Self::UINT4 => "uint4",
            Self::FLOAT4 => "float4",
            _ => "invalid",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "invalid({:#x})", self.0);
        }
        if self.is_buffer_1d() {
            write!(f, "buffer1d<{}>", self.base_name())
        } else if self.is_buffer_2d() {
            write!(f, "buffer2d<{}>", self.base_name())
        } else {
            f.write_str(self.base_name())
        }
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueType({self})")
    }
}

impl serde::Serialize for ValueType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
