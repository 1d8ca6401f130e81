use tessel_core::ValueType;

use crate::ast::{AstError, Lane, NodeKind};

/// Contract violations detected while tracing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TraceError {
    #[error("exit_block called with only the program root open")]
    UnbalancedExit,

    #[error("{kind} block is still open ({depth} blocks deep)")]
    UnclosedBlock { kind: NodeKind, depth: usize },

    #[error("expected to close {expected}, but {found} is open")]
    BlockMismatch { expected: NodeKind, found: NodeKind },

    #[error("{0} cannot be opened with enter_block")]
    NotEnterable(NodeKind),

    #[error("{kind} must be opened directly under Program, not under {parent}")]
    MisplacedSection { kind: NodeKind, parent: NodeKind },

    #[error("{0} is declared more than once")]
    DuplicateSection(NodeKind),

    #[error("declaration belongs in {expected}, but the open block is {found}")]
    MisplacedDeclaration { expected: NodeKind, found: NodeKind },

    #[error("statements are not allowed in {0}")]
    MisplacedStatement(NodeKind),

    #[error("{0} must follow If or ElseIf")]
    DanglingElse(NodeKind),

    #[error("`{0}` is not a valid name")]
    InvalidName(String),

    #[error("`{0}` is already declared")]
    DuplicateName(String),

    #[error("{ty} value is read before it is assigned")]
    UninitializedRead { ty: ValueType },

    #[error("sample index {0} is negative")]
    NegativeIndex(i32),

    #[error("lanes of an input are read-only")]
    ReadOnlyTarget,

    #[error("a member value has no lanes of its own")]
    NotAddressable,

    #[error("lane {} is out of range for {ty}", lane.accessor())]
    LaneOutOfRange { lane: Lane, ty: ValueType },

    #[error(transparent)]
    Ast(#[from] AstError),
}
