//! Statement emission.

use std::collections::HashSet;

use super::{Emitter, GenerateError};
use crate::ast::{NodeId, NodeKind, Payload};

impl Emitter<'_> {
    /// Emit `{ ... }` over the children of `block` after its `skip` header
    /// children. Variables first assigned inside are dropped at the brace.
    pub(super) fn emit_body(&mut self, block: NodeId, skip: usize) -> Result<(), GenerateError> {
        self.line("{");
        self.depth += 1;
        self.scopes.push(HashSet::new());
        self.emit_statements(block, skip)?;
        self.scopes.pop();
        self.depth -= 1;
        self.line("}");
        Ok(())
    }

    fn emit_statements(&mut self, block: NodeId, skip: usize) -> Result<(), GenerateError> {
        let ast = self.ast;
        let statements = ast.children(block).get(skip..).unwrap_or_default();
        let mut previous = None;
        for &id in statements {
            let kind = ast.kind(id);
            if matches!(kind, NodeKind::ElseIf | NodeKind::Else)
                && !matches!(previous, Some(NodeKind::If | NodeKind::ElseIf))
            {
                return Err(GenerateError::DanglingElse { node: id, kind });
            }
            self.emit_statement(id)?;
            previous = Some(kind);
        }
        Ok(())
    }

    fn emit_statement(&mut self, id: NodeId) -> Result<(), GenerateError> {
        let kind = self.ast.kind(id);
        match kind {
            NodeKind::Assignment => self.emit_assignment(id),
            NodeKind::If => self.emit_conditional(id, "if"),
            NodeKind::ElseIf => self.emit_conditional(id, "else if"),
            NodeKind::While => self.emit_conditional(id, "while"),
            NodeKind::Else => {
                self.line("else");
                self.emit_body(id, 0)
            }
            NodeKind::ForRange => self.emit_for_range(id),
            NodeKind::Block => self.emit_body(id, 0),
            NodeKind::Program
            | NodeKind::ConstData
            | NodeKind::OutData
            | NodeKind::Main
            | NodeKind::OutVar
            | NodeKind::ConstVar
            | NodeKind::Var
            | NodeKind::Literal
            | NodeKind::Equal
            | NodeKind::NotEqual
            | NodeKind::Greater
            | NodeKind::GreaterEqual
            | NodeKind::Less
            | NodeKind::LessEqual
            | NodeKind::LogicalAnd
            | NodeKind::LogicalOr
            | NodeKind::LogicalNot
            | NodeKind::BitwiseAnd
            | NodeKind::BitwiseOr
            | NodeKind::BitwiseXor
            | NodeKind::BitwiseNot
            | NodeKind::ShiftLeft
            | NodeKind::ShiftRight
            | NodeKind::Negate
            | NodeKind::Add
            | NodeKind::Subtract
            | NodeKind::Multiply
            | NodeKind::Divide
            | NodeKind::Modulo
            | NodeKind::Constructor
            | NodeKind::Cast
            | NodeKind::Function
            | NodeKind::Sample1D
            | NodeKind::Sample2D
            | NodeKind::Member
            | NodeKind::Index
            | NodeKind::NormalizedIndex => Err(GenerateError::UnexpectedNode {
                node: id,
                kind,
                context: "statement",
            }),
        }
    }

    /// `keyword (cond)` followed by the body after the condition.
    fn emit_conditional(&mut self, id: NodeId, keyword: &str) -> Result<(), GenerateError> {
        let cond = self.header(id)?;
        self.line(&format!("{keyword} ({})", strip_parens(&cond)));
        self.emit_body(id, 1)
    }

    fn header(&self, id: NodeId) -> Result<String, GenerateError> {
        match self.ast.children(id).first() {
            Some(&cond) => self.expr(cond),
            None => Err(GenerateError::MalformedNode {
                node: id,
                kind: self.ast.kind(id),
                found: 0,
            }),
        }
    }

    fn emit_for_range(&mut self, id: NodeId) -> Result<(), GenerateError> {
        let symbol = self.symbol_of(id)?;
        let children = self.ast.children(id);
        let (start, stop) = match children {
            [start, stop, ..] => (*start, *stop),
            _ => {
                return Err(GenerateError::MalformedNode {
                    node: id,
                    kind: NodeKind::ForRange,
                    found: children.len(),
                });
            }
        };
        let start = self.expr(start)?;
        let stop = self.expr(stop)?;

        self.scopes.push(HashSet::from([symbol]));
        let var = self.ident_of(symbol);
        self.line(&format!(
            "for (int {var} = {start}; {var} < {stop}; {var}++)"
        ));
        let result = self.emit_body(id, 2);
        self.scopes.pop();
        result
    }

    fn emit_assignment(&mut self, id: NodeId) -> Result<(), GenerateError> {
        let [lhs, rhs] = self.children_exact::<2>(id)?;
        let value = self.expr(rhs)?;
        let ast = self.ast;
        let target = ast.get(lhs);

        match (target.kind(), target.payload()) {
            (NodeKind::Var, &Payload::Symbol(symbol)) => {
                if self.inputs.contains(&symbol) {
                    return Err(GenerateError::AssignToInput { node: id, symbol });
                }
                let name = self.ident_of(symbol);
                if self.is_declared(symbol) {
                    self.line(&format!("{name} = {value};"));
                } else {
                    let ty = self.spell(lhs, target.ty())?;
                    self.line(&format!("{ty} {name} = {value};"));
                    self.declare(symbol);
                }
            }
            (
                NodeKind::Member,
                &Payload::Member {
                    owner,
                    owner_type,
                    lane,
                },
            ) => {
                if self.inputs.contains(&owner) {
                    return Err(GenerateError::AssignToInput {
                        node: id,
                        symbol: owner,
                    });
                }
                let name = self.ident_of(owner);
                if !self.is_declared(owner) {
                    let ty = self.spell(lhs, owner_type)?;
                    self.line(&format!("{ty} {name};"));
                    self.declare(owner);
                }
                self.line(&format!("{name}.{} = {value};", lane.accessor()));
            }
            (kind, _) => {
                return Err(GenerateError::UnexpectedNode {
                    node: lhs,
                    kind,
                    context: "assignment target",
                });
            }
        }
        Ok(())
    }
}

/// Drop one pair of parentheses enclosing the whole of `text`.
pub(super) fn strip_parens(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return text;
    };
    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return text,
            },
            _ => {}
        }
    }
    if depth == 0 { inner } else { text }
}
