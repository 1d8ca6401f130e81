//! Conditionals and loops.
//!
//! Each construct has a `begin_*` form that leaves the new block open
//! (closed later with [`Session::exit_block`]) and a closure form that
//! closes it automatically.

use tessel_core::{ValueType, utils};

use super::{Session, TraceError};
use crate::ast::{Node, NodeKind};
use crate::value::{Bool, Int, Operand, Traced, Value};

impl Session {
    pub fn begin_if<C>(&mut self, cond: C) -> Result<(), TraceError>
    where
        C: Operand<Ty = Bool> + Traced,
    {
        self.ensure_statements()?;
        self.open_conditional(NodeKind::If, Some(cond))
    }

    /// Close the open `If`/`ElseIf` and open an `ElseIf` after it.
    pub fn begin_else_if<C>(&mut self, cond: C) -> Result<(), TraceError>
    where
        C: Operand<Ty = Bool> + Traced,
    {
        self.close_chain_link(NodeKind::ElseIf)?;
        self.open_conditional(NodeKind::ElseIf, Some(cond))
    }

    /// Close the open `If`/`ElseIf` and open an `Else` after it.
    pub fn begin_else(&mut self) -> Result<(), TraceError> {
        self.close_chain_link(NodeKind::Else)?;
        self.open_conditional::<Value<Bool>>(NodeKind::Else, None)
    }

    pub fn begin_while<C>(&mut self, cond: C) -> Result<(), TraceError>
    where
        C: Operand<Ty = Bool> + Traced,
    {
        self.ensure_statements()?;
        self.open_conditional(NodeKind::While, Some(cond))
    }

    /// Open a counted loop over `start..stop` and return its induction
    /// variable, which is scoped to the loop.
    pub fn begin_for_range<A, B>(
        &mut self,
        name: &str,
        start: A,
        stop: B,
    ) -> Result<Value<Int>, TraceError>
    where
        A: Operand<Ty = Int>,
        B: Operand<Ty = Int>,
    {
        self.ensure_statements()?;
        if !utils::is_identifier(name) {
            return Err(TraceError::InvalidName(name.to_string()));
        }
        let symbol = self.next_symbol();
        let node = self
            .ast
            .alloc(Node::symbol(NodeKind::ForRange, ValueType::VOID, symbol).named(name));
        self.attach(node, start)?;
        self.attach(node, stop)?;
        self.open(node)?;
        Ok(Value::bound(symbol))
    }

    pub fn if_<C, R>(
        &mut self,
        cond: C,
        f: impl FnOnce(&mut Self) -> Result<R, TraceError>,
    ) -> Result<R, TraceError>
    where
        C: Operand<Ty = Bool> + Traced,
    {
        self.begin_if(cond)?;
        let block = self.current_block();
        self.within(block, f)
    }

    /// `else if` branch; must directly follow an `if_` or `else_if`.
    pub fn else_if<C, R>(
        &mut self,
        cond: C,
        f: impl FnOnce(&mut Self) -> Result<R, TraceError>,
    ) -> Result<R, TraceError>
    where
        C: Operand<Ty = Bool> + Traced,
    {
        self.ensure_follows_conditional(NodeKind::ElseIf)?;
        self.open_conditional(NodeKind::ElseIf, Some(cond))?;
        let block = self.current_block();
        self.within(block, f)
    }

    /// `else` branch; must directly follow an `if_` or `else_if`.
    pub fn else_<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, TraceError>,
    ) -> Result<R, TraceError> {
        self.ensure_follows_conditional(NodeKind::Else)?;
        self.open_conditional::<Value<Bool>>(NodeKind::Else, None)?;
        let block = self.current_block();
        self.within(block, f)
    }

    pub fn while_<C, R>(
        &mut self,
        cond: C,
        f: impl FnOnce(&mut Self) -> Result<R, TraceError>,
    ) -> Result<R, TraceError>
    where
        C: Operand<Ty = Bool> + Traced,
    {
        self.begin_while(cond)?;
        let block = self.current_block();
        self.within(block, f)
    }

    pub fn for_range<A, B, R>(
        &mut self,
        name: &str,
        start: A,
        stop: B,
        f: impl FnOnce(&mut Self, Value<Int>) -> Result<R, TraceError>,
    ) -> Result<R, TraceError>
    where
        A: Operand<Ty = Int>,
        B: Operand<Ty = Int>,
    {
        let index = self.begin_for_range(name, start, stop)?;
        let block = self.current_block();
        self.within(block, |s| f(s, index))
    }

    fn open_conditional<C: Operand>(
        &mut self,
        kind: NodeKind,
        cond: Option<C>,
    ) -> Result<(), TraceError> {
        let node = self.ast.alloc(Node::new(kind, ValueType::VOID));
        if let Some(cond) = cond {
            self.attach(node, cond)?;
        }
        self.open(node)
    }

    /// The open block must be `If`/`ElseIf`; close it.
    fn close_chain_link(&mut self, next: NodeKind) -> Result<(), TraceError> {
        if !matches!(self.current_kind(), NodeKind::If | NodeKind::ElseIf) {
            return Err(TraceError::DanglingElse(next));
        }
        self.exit_block()?;
        Ok(())
    }

    /// The last statement of the open block must be `If`/`ElseIf`.
    fn ensure_follows_conditional(&self, next: NodeKind) -> Result<(), TraceError> {
        let previous = self
            .ast
            .children(self.current_block())
            .last()
            .map(|&id| self.ast.kind(id));
        match previous {
            Some(NodeKind::If | NodeKind::ElseIf) => Ok(()),
            _ => Err(TraceError::DanglingElse(next)),
        }
    }
}
