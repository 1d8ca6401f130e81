//! Node payloads and the node record itself.

use std::fmt;

use tessel_core::ValueType;

use super::{NodeId, NodeKind};

/// Identity of a materialized variable, unique within one session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Lane of a vector addressed by member access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lane {
    X,
    Y,
    Z,
    W,
}

impl Lane {
    pub fn index(self) -> u8 {
        match self {
            Lane::X => 0,
            Lane::Y => 1,
            Lane::Z => 2,
            Lane::W => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Lane::X),
            1 => Some(Lane::Y),
            2 => Some(Lane::Z),
            3 => Some(Lane::W),
            _ => None,
        }
    }

    /// Swizzle letter used by the target language.
    pub fn accessor(self) -> &'static str {
        match self {
            Lane::X => "x",
            Lane::Y => "y",
            Lane::Z => "z",
            Lane::W => "w",
        }
    }
}

/// Value of a literal node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LiteralValue {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Float(f32),
}

impl LiteralValue {
    pub fn value_type(self) -> ValueType {
        match self {
            LiteralValue::Bool(_) => ValueType::BOOL,
            LiteralValue::Int(_) => ValueType::INT,
            LiteralValue::UInt(_) => ValueType::UINT,
            LiteralValue::Float(_) => ValueType::FLOAT,
        }
    }

    /// Raw little-endian bytes; booleans use a single byte.
    pub fn to_le_bytes(self) -> Vec<u8> {
        match self {
            LiteralValue::Bool(v) => vec![u8::from(v)],
            LiteralValue::Int(v) => v.to_le_bytes().to_vec(),
            LiteralValue::UInt(v) => v.to_le_bytes().to_vec(),
            LiteralValue::Float(v) => v.to_le_bytes().to_vec(),
        }
    }

    /// Inverse of [`LiteralValue::to_le_bytes`] for a declared primitive type.
    pub fn from_le_bytes(ty: ValueType, bytes: &[u8]) -> Option<Self> {
        match ty {
            ValueType::BOOL => match bytes {
                [0] => Some(LiteralValue::Bool(false)),
                [1] => Some(LiteralValue::Bool(true)),
                _ => None,
            },
            ValueType::INT => Some(LiteralValue::Int(i32::from_le_bytes(bytes.try_into().ok()?))),
            ValueType::UINT => Some(LiteralValue::UInt(u32::from_le_bytes(bytes.try_into().ok()?))),
            ValueType::FLOAT => {
                Some(LiteralValue::Float(f32::from_le_bytes(bytes.try_into().ok()?)))
            }
            _ => None,
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Bool(v) => write!(f, "{v}"),
            LiteralValue::Int(v) => write!(f, "{v}"),
            LiteralValue::UInt(v) => write!(f, "{v}u"),
            LiteralValue::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// Kind-specific data carried by a node.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    None,
    /// `Var`, `ConstVar`, `OutVar`, and the induction variable of `ForRange`.
    Symbol(SymbolId),
    Literal(LiteralValue),
    /// Lane of a variable; never owns storage.
    Member {
        owner: SymbolId,
        owner_type: ValueType,
        lane: Lane,
    },
}

/// A single AST node. Children are arena indices owned exclusively.
#[derive(Clone, Debug)]
pub struct Node {
    pub(super) kind: NodeKind,
    pub(super) ty: ValueType,
    pub(super) children: Vec<NodeId>,
    pub(super) payload: Payload,
    pub(super) name: Option<String>,
    pub(super) parent: Option<NodeId>,
}

impl Node {
    fn with(kind: NodeKind, ty: ValueType, payload: Payload) -> Self {
        Self {
            kind,
            ty,
            children: Vec::new(),
            payload,
            name: None,
            parent: None,
        }
    }

    /// Block or operator node without payload.
    pub(crate) fn new(kind: NodeKind, ty: ValueType) -> Self {
        Self::with(kind, ty, Payload::None)
    }

    /// Reference or declaration of a symbol.
    pub(crate) fn symbol(kind: NodeKind, ty: ValueType, symbol: SymbolId) -> Self {
        Self::with(kind, ty, Payload::Symbol(symbol))
    }

    pub(crate) fn literal(value: LiteralValue) -> Self {
        Self::with(NodeKind::Literal, value.value_type(), Payload::Literal(value))
    }

    pub(crate) fn member(ty: ValueType, owner: SymbolId, owner_type: ValueType, lane: Lane) -> Self {
        Self::with(
            NodeKind::Member,
            ty,
            Payload::Member {
                owner,
                owner_type,
                lane,
            },
        )
    }

    pub(crate) fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn ty(&self) -> ValueType {
        self.ty
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn symbol_id(&self) -> Option<SymbolId> {
        match self.payload {
            Payload::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn literal_value(&self) -> Option<LiteralValue> {
        match self.payload {
            Payload::Literal(value) => Some(value),
            _ => None,
        }
    }
}
