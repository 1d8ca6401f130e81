//! Value handles and operands.

use std::fmt;
use std::marker::PhantomData;

use tessel_core::ValueType;

use super::types::{Bool, Float, HasW, HasZ, Int, ShaderType, UInt, VectorType};
use crate::ast::{Lane, LiteralValue, NodeId, SymbolId};
use crate::trace::{Session, TraceError};

/// What a handle currently stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Repr {
    /// Declared but never assigned; owns no symbol yet.
    Unbound,
    /// Materialized variable.
    Bound(SymbolId),
    /// Result of an operation, kept as a detached subtree until used.
    Pending(NodeId),
    /// Lane of a materialized vector.
    Member {
        owner: SymbolId,
        owner_type: ValueType,
        lane: Lane,
        writable: bool,
    },
}

/// Handle to a traced value of type `T`.
///
/// Handles record operations instead of performing them. Reading a handle
/// (passing it as an [`Operand`]) references its symbol, or reuses its
/// pending subtree; assigning to it through [`Session::assign`] gives it a
/// symbol the first time.
pub struct Value<T> {
    pub(crate) repr: Repr,
    _ty: PhantomData<fn() -> T>,
}

impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Self {
            repr: self.repr,
            _ty: PhantomData,
        }
    }
}

impl<T: ShaderType> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value<{}>({:?})", T::TYPE, self.repr)
    }
}

impl<T: ShaderType> Default for Value<T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<T: ShaderType> Value<T> {
    /// A variable with no value yet. Reading it before assignment fails.
    pub fn unbound() -> Self {
        Self::from_repr(Repr::Unbound)
    }

    pub(crate) fn from_repr(repr: Repr) -> Self {
        Self {
            repr,
            _ty: PhantomData,
        }
    }

    pub(crate) fn bound(symbol: SymbolId) -> Self {
        Self::from_repr(Repr::Bound(symbol))
    }

    pub(crate) fn pending(node: NodeId) -> Self {
        Self::from_repr(Repr::Pending(node))
    }

    pub fn ty(&self) -> ValueType {
        T::TYPE
    }

    /// Symbol of a materialized variable.
    pub fn symbol(&self) -> Option<SymbolId> {
        match self.repr {
            Repr::Bound(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self.repr, Repr::Bound(_))
    }

    pub fn is_member(&self) -> bool {
        matches!(self.repr, Repr::Member { .. })
    }
}

/// Read-only handle to a const input.
pub struct Input<T> {
    symbol: SymbolId,
    _ty: PhantomData<fn() -> T>,
}

impl<T> Clone for Input<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Input<T> {}

impl<T: ShaderType> fmt::Debug for Input<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input<{}>({})", T::TYPE, self.symbol)
    }
}

impl<T: ShaderType> Input<T> {
    pub(crate) fn new(symbol: SymbolId) -> Self {
        Self {
            symbol,
            _ty: PhantomData,
        }
    }

    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    pub fn ty(&self) -> ValueType {
        T::TYPE
    }
}

impl<V: VectorType> Input<V> {
    fn lane(&self, lane: Lane) -> Value<V::Lane> {
        Value::from_repr(Repr::Member {
            owner: self.symbol,
            owner_type: V::TYPE,
            lane,
            writable: false,
        })
    }

    pub fn x(&self) -> Value<V::Lane> {
        self.lane(Lane::X)
    }

    pub fn y(&self) -> Value<V::Lane> {
        self.lane(Lane::Y)
    }
}

impl<V: HasZ> Input<V> {
    pub fn z(&self) -> Value<V::Lane> {
        self.lane(Lane::Z)
    }
}

impl<V: HasW> Input<V> {
    pub fn w(&self) -> Value<V::Lane> {
        self.lane(Lane::W)
    }
}

/// Anything usable as an operation argument: traced handles and host
/// primitives (which become literals).
pub trait Operand {
    type Ty: ShaderType;

    /// Produce a detached node standing for this operand.
    fn lower(self, session: &mut Session) -> Result<NodeId, TraceError>;

    /// The literal value, for host primitives.
    fn literal(&self) -> Option<LiteralValue> {
        None
    }
}

/// Operands that come from the trace rather than from host literals.
///
/// Control-flow conditions require it: a host `bool` would fix the branch
/// at trace time.
pub trait Traced: Operand {}

impl<T: ShaderType> Operand for Value<T> {
    type Ty = T;

    fn lower(self, session: &mut Session) -> Result<NodeId, TraceError> {
        session.lower_repr(self.repr, T::TYPE)
    }
}

impl<T: ShaderType> Operand for &Value<T> {
    type Ty = T;

    fn lower(self, session: &mut Session) -> Result<NodeId, TraceError> {
        session.lower_repr(self.repr, T::TYPE)
    }
}

impl<T: ShaderType> Operand for Input<T> {
    type Ty = T;

    fn lower(self, session: &mut Session) -> Result<NodeId, TraceError> {
        Ok(session.var_node(T::TYPE, self.symbol))
    }
}

impl<T: ShaderType> Operand for &Input<T> {
    type Ty = T;

    fn lower(self, session: &mut Session) -> Result<NodeId, TraceError> {
        Ok(session.var_node(T::TYPE, self.symbol))
    }
}

impl<T: ShaderType> Traced for Value<T> {}
impl<T: ShaderType> Traced for &Value<T> {}
impl<T: ShaderType> Traced for Input<T> {}
impl<T: ShaderType> Traced for &Input<T> {}

macro_rules! primitive_operand {
    ($($host:ty => $ty:ident($variant:ident)),* $(,)?) => {
        $(impl Operand for $host {
            type Ty = $ty;

            fn lower(self, session: &mut Session) -> Result<NodeId, TraceError> {
                Ok(session.literal_node(LiteralValue::$variant(self)))
            }

            fn literal(&self) -> Option<LiteralValue> {
                Some(LiteralValue::$variant(*self))
            }
        })*
    };
}

primitive_operand! {
    bool => Bool(Bool),
    i32 => Int(Int),
    u32 => UInt(UInt),
    f32 => Float(Float),
}
