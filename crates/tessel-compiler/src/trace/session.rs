//! Compilation session: symbol counter, open-block stack and the arena.

use indexmap::IndexSet;
use tessel_core::ValueType;

use super::{Source, TraceError};
use crate::ast::{Ast, LiteralValue, Node, NodeId, NodeKind, SymbolId};
use crate::value::{Operand, Repr};

/// State of one trace.
///
/// The program root is created with the session and stays at the bottom of
/// the block stack; every statement goes to the block on top.
#[derive(Debug)]
pub struct Session {
    pub(crate) ast: Ast,
    root: NodeId,
    blocks: Vec<NodeId>,
    next_symbol: u32,
    /// Input and output names, in declaration order.
    pub(super) names: IndexSet<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let mut ast = Ast::new();
        let root = ast.alloc(Node::new(NodeKind::Program, ValueType::VOID));
        Self {
            ast,
            root,
            blocks: vec![root],
            next_symbol: 0,
            names: IndexSet::new(),
        }
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of open blocks, counting the program root.
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    pub fn current_block(&self) -> NodeId {
        self.blocks.last().copied().unwrap_or(self.root)
    }

    pub fn current_kind(&self) -> NodeKind {
        self.ast.kind(self.current_block())
    }

    /// Allocate the next symbol id.
    pub fn next_symbol(&mut self) -> SymbolId {
        let symbol = SymbolId::from_raw(self.next_symbol);
        self.next_symbol += 1;
        tracing::trace!(%symbol, "allocate symbol");
        symbol
    }

    pub fn symbol_count(&self) -> u32 {
        self.next_symbol
    }

    /// Open a section (`ConstData`, `OutData`, `Main`) or a nested `Block`.
    ///
    /// Conditional and loop blocks have dedicated `begin_*` methods since
    /// they carry header expressions.
    pub fn enter_block(&mut self, kind: NodeKind) -> Result<NodeId, TraceError> {
        match kind {
            NodeKind::ConstData | NodeKind::OutData | NodeKind::Main => {
                let parent = self.current_kind();
                if parent != NodeKind::Program {
                    return Err(TraceError::MisplacedSection { kind, parent });
                }
                let exists = self
                    .ast
                    .children(self.root)
                    .iter()
                    .any(|&id| self.ast.kind(id) == kind);
                if exists {
                    return Err(TraceError::DuplicateSection(kind));
                }
            }
            NodeKind::Block => self.ensure_statements()?,
            _ => return Err(TraceError::NotEnterable(kind)),
        }
        let node = self.ast.alloc(Node::new(kind, ValueType::VOID));
        self.open(node)?;
        Ok(node)
    }

    /// Close the innermost open block and return it.
    pub fn exit_block(&mut self) -> Result<NodeId, TraceError> {
        if self.blocks.len() <= 1 {
            return Err(TraceError::UnbalancedExit);
        }
        let block = self.blocks.pop().ok_or(TraceError::UnbalancedExit)?;
        tracing::trace!(kind = %self.ast.kind(block), depth = self.blocks.len(), "exit block");
        Ok(block)
    }

    /// Close the trace. Only the program root may still be open.
    pub fn finish(self) -> Result<Source, TraceError> {
        if self.blocks.len() != 1 {
            return Err(TraceError::UnclosedBlock {
                kind: self.current_kind(),
                depth: self.blocks.len(),
            });
        }
        tracing::debug!(
            nodes = self.ast.len(),
            symbols = self.next_symbol,
            "trace finished"
        );
        Ok(Source::new(self.ast, self.root, self.next_symbol))
    }

    pub fn const_data<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, TraceError>,
    ) -> Result<R, TraceError> {
        let block = self.enter_block(NodeKind::ConstData)?;
        self.within(block, f)
    }

    pub fn out_data<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, TraceError>,
    ) -> Result<R, TraceError> {
        let block = self.enter_block(NodeKind::OutData)?;
        self.within(block, f)
    }

    pub fn main<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, TraceError>,
    ) -> Result<R, TraceError> {
        let block = self.enter_block(NodeKind::Main)?;
        self.within(block, f)
    }

    /// Nested scope; variables first assigned inside are not visible after it.
    pub fn scope<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, TraceError>,
    ) -> Result<R, TraceError> {
        let block = self.enter_block(NodeKind::Block)?;
        self.within(block, f)
    }

    /// Run `f` inside the already opened `block`, then close it.
    pub(super) fn within<R>(
        &mut self,
        block: NodeId,
        f: impl FnOnce(&mut Self) -> Result<R, TraceError>,
    ) -> Result<R, TraceError> {
        let result = f(self)?;
        let top = self.current_block();
        if top != block {
            return Err(TraceError::BlockMismatch {
                expected: self.ast.kind(block),
                found: self.ast.kind(top),
            });
        }
        self.exit_block()?;
        Ok(result)
    }

    /// Append `node` to the current block and make it the current block.
    pub(super) fn open(&mut self, node: NodeId) -> Result<(), TraceError> {
        let parent = self.current_block();
        self.ast.add_child(parent, node)?;
        self.blocks.push(node);
        tracing::trace!(kind = %self.ast.kind(node), depth = self.blocks.len(), "enter block");
        Ok(())
    }

    pub(super) fn ensure_statements(&self) -> Result<(), TraceError> {
        let kind = self.current_kind();
        if kind.accepts_statements() {
            Ok(())
        } else {
            Err(TraceError::MisplacedStatement(kind))
        }
    }

    /// Append a statement to the current block.
    pub(super) fn append(&mut self, node: NodeId) -> Result<(), TraceError> {
        self.ensure_statements()?;
        let block = self.current_block();
        self.ast.add_child(block, node)?;
        Ok(())
    }

    /// Lower `operand` and append it as the next child of `parent`.
    pub(crate) fn attach(
        &mut self,
        parent: NodeId,
        operand: impl Operand,
    ) -> Result<(), TraceError> {
        let child = operand.lower(self)?;
        self.ast.add_child(parent, child)?;
        Ok(())
    }

    pub(crate) fn var_node(&mut self, ty: ValueType, symbol: SymbolId) -> NodeId {
        self.ast.alloc(Node::symbol(NodeKind::Var, ty, symbol))
    }

    pub(crate) fn literal_node(&mut self, value: LiteralValue) -> NodeId {
        self.ast.alloc(Node::literal(value))
    }

    /// Node standing for a handle: a reference for symbols and lanes, the
    /// pending subtree itself while still detached, a copy afterwards.
    pub(crate) fn lower_repr(&mut self, repr: Repr, ty: ValueType) -> Result<NodeId, TraceError> {
        match repr {
            Repr::Unbound => Err(TraceError::UninitializedRead { ty }),
            Repr::Bound(symbol) => Ok(self.var_node(ty, symbol)),
            Repr::Pending(node) if self.ast.is_attached(node) => Ok(self.ast.deep_clone(node)),
            Repr::Pending(node) => Ok(node),
            Repr::Member {
                owner,
                owner_type,
                lane,
                ..
            } => Ok(self.ast.alloc(Node::member(ty, owner, owner_type, lane))),
        }
    }
}
