//! Node kinds and their fixed child arity.

use std::fmt;

/// Closed set of AST node kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Structure
    Program,
    ConstData,
    OutData,
    Main,
    Block,
    If,
    ElseIf,
    Else,
    While,
    ForRange,
    // Declarations and references
    OutVar,
    ConstVar,
    Var,
    Literal,
    // Statements
    Assignment,
    // Comparison
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    // Logic
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    // Bitwise
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNot,
    ShiftLeft,
    ShiftRight,
    // Arithmetic
    Negate,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    // Calls and access
    Constructor,
    Cast,
    Function,
    Sample1D,
    Sample2D,
    Member,
    Index,
    NormalizedIndex,
}

/// How many children a node of a given kind may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    /// `None` for statement lists.
    pub max: Option<usize>,
}

impl Arity {
    const fn exact(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    const fn range(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub fn admits(self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl NodeKind {
    pub fn arity(self) -> Arity {
        use NodeKind::*;
        match self {
            Program | ConstData | OutData | Main | Block | Else => Arity::at_least(0),
            If | ElseIf | While => Arity::at_least(1),
            ForRange => Arity::at_least(2),
            OutVar | ConstVar | Var | Literal | Member | Index | NormalizedIndex => {
                Arity::exact(0)
            }
            LogicalNot | BitwiseNot | Negate | Cast => Arity::exact(1),
            Assignment | Equal | NotEqual | Greater | GreaterEqual | Less | LessEqual
            | LogicalAnd | LogicalOr | BitwiseAnd | BitwiseOr | BitwiseXor | ShiftLeft
            | ShiftRight | Add | Subtract | Multiply | Divide | Modulo => Arity::exact(2),
            Sample1D => Arity::exact(2),
            Sample2D => Arity::exact(3),
            Constructor => Arity::range(1, 4),
            Function => Arity::range(1, 4),
        }
    }

    /// Kinds that hold a statement list and stay open while tracing.
    pub fn is_block(self) -> bool {
        use NodeKind::*;
        matches!(
            self,
            Program | ConstData | OutData | Main | Block | If | ElseIf | Else | While | ForRange
        )
    }

    /// Top-level sections of a program.
    pub fn is_section(self) -> bool {
        matches!(self, NodeKind::ConstData | NodeKind::OutData | NodeKind::Main)
    }

    /// Blocks whose children are executable statements.
    pub fn accepts_statements(self) -> bool {
        self.is_block() && !matches!(self, NodeKind::Program | NodeKind::ConstData | NodeKind::OutData)
    }

    /// Number of leading children that are header expressions rather than
    /// statements (condition, loop bounds).
    pub fn header_len(self) -> usize {
        match self {
            NodeKind::If | NodeKind::ElseIf | NodeKind::While => 1,
            NodeKind::ForRange => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
