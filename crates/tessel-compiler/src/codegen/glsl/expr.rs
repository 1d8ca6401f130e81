//! Expression rendering.

use tessel_core::Builtin;

use super::intrinsics::{self, INDEX_EXPR, Intrinsic, NORMALIZED_INDEX_EXPR};
use super::naming::texel_swizzle;
use super::{Emitter, GenerateError};
use crate::ast::{LiteralValue, NodeId, NodeKind, Payload};

/// Work item of the expression walk.
enum Step {
    /// Validate the node and schedule its operands.
    Visit(NodeId),
    /// Combine the last N rendered strings into this node's text.
    Render(NodeId, usize),
}

impl Emitter<'_> {
    /// Render the expression rooted at `id`. Binary operators are always
    /// parenthesized, so no precedence table is needed.
    ///
    /// Operands are rendered before their parent through an explicit work
    /// stack; expression depth is bounded only by memory.
    pub(super) fn expr(&self, id: NodeId) -> Result<String, GenerateError> {
        let mut steps = vec![Step::Visit(id)];
        let mut rendered: Vec<String> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(node) => {
                    let operands = self.operands(node)?;
                    steps.push(Step::Render(node, operands.len()));
                    steps.extend(operands.iter().rev().map(|&child| Step::Visit(child)));
                }
                Step::Render(node, count) => {
                    let args = rendered.split_off(rendered.len().saturating_sub(count));
                    let text = self.render(node, &args)?;
                    rendered.push(text);
                }
            }
        }
        rendered.pop().ok_or_else(|| self.malformed(id))
    }

    /// Child expressions of `id` in rendering order, after checking the
    /// node's shape.
    fn operands(&self, id: NodeId) -> Result<&[NodeId], GenerateError> {
        let node = self.ast.get(id);
        let children = node.children();
        let kind = node.kind();
        match kind {
            NodeKind::Var
            | NodeKind::Literal
            | NodeKind::Member
            | NodeKind::Index
            | NodeKind::NormalizedIndex => Ok(&[]),

            NodeKind::Negate | NodeKind::LogicalNot | NodeKind::BitwiseNot => {
                self.expect_children(id, 1)
            }

            NodeKind::Cast | NodeKind::Constructor => {
                self.spell(id, node.ty())?;
                if children.is_empty() {
                    return Err(self.malformed(id));
                }
                Ok(children)
            }
            NodeKind::Function => {
                let (builtin, args) = self.builtin_call(id)?;
                if args.len() != builtin.arity() {
                    return Err(GenerateError::BuiltinArity {
                        node: id,
                        builtin,
                        expected: builtin.arity(),
                        found: args.len(),
                    });
                }
                Ok(args)
            }

            NodeKind::Sample1D | NodeKind::Sample2D => {
                let expected = if kind == NodeKind::Sample1D { 2 } else { 3 };
                let operands = self.expect_children(id, expected)?;
                self.check_buffer(operands[0])?;
                Ok(operands)
            }

            _ if binary_op(kind).is_some() => self.expect_children(id, 2),

            _ => Err(self.unexpected(id, "expression")),
        }
    }

    /// Text of `id` given its already rendered operands.
    fn render(&self, id: NodeId, args: &[String]) -> Result<String, GenerateError> {
        let node = self.ast.get(id);
        let kind = node.kind();
        let text = match (kind, args) {
            (NodeKind::Var, []) => {
                let symbol = self.symbol_of(id)?;
                self.name_of(id, symbol)?
            }
            (NodeKind::Literal, []) => match node.payload() {
                Payload::Literal(value) => literal(*value),
                _ => return Err(self.unexpected(id, "literal value")),
            },
            (NodeKind::Member, []) => match *node.payload() {
                Payload::Member { owner, lane, .. } => {
                    format!("{}.{}", self.name_of(id, owner)?, lane.accessor())
                }
                _ => return Err(self.unexpected(id, "member reference")),
            },
            (NodeKind::Index, []) => INDEX_EXPR.to_string(),
            (NodeKind::NormalizedIndex, []) => NORMALIZED_INDEX_EXPR.to_string(),

            (NodeKind::Negate, [operand]) => format!("-({operand})"),
            (NodeKind::LogicalNot, [operand]) => format!("!({operand})"),
            (NodeKind::BitwiseNot, [operand]) => format!("~({operand})"),

            (NodeKind::Cast | NodeKind::Constructor, [_, ..]) => {
                format!("{}({})", self.spell(id, node.ty())?, args.join(", "))
            }
            (NodeKind::Function, _) => {
                let (builtin, _) = self.builtin_call(id)?;
                match intrinsics::intrinsic(builtin) {
                    Intrinsic::Expr(text) => text.to_string(),
                    Intrinsic::Call(name) => format!("{name}({})", args.join(", ")),
                }
            }

            (NodeKind::Sample1D, [buffer, index]) => format!(
                "texelFetch({buffer}, {index}){}",
                texel_swizzle(node.ty().lanes())
            ),
            (NodeKind::Sample2D, [buffer, x, y]) => format!(
                "texelFetch({buffer}, ivec2({x}, {y})){}",
                texel_swizzle(node.ty().lanes())
            ),

            (_, [lhs, rhs]) => match binary_op(kind) {
                Some(op) => format!("({lhs} {op} {rhs})"),
                None => return Err(self.malformed(id)),
            },
            _ => return Err(self.malformed(id)),
        };
        Ok(text)
    }

    /// Built-in called by a `Function` node and its argument nodes.
    fn builtin_call(&self, id: NodeId) -> Result<(Builtin, &[NodeId]), GenerateError> {
        let Some((&first, args)) = self.ast.children(id).split_first() else {
            return Err(self.malformed(id));
        };
        let raw = match self.ast.get(first).literal_value() {
            Some(LiteralValue::Int(raw)) => raw,
            _ => return Err(self.unexpected(first, "built-in identity")),
        };
        let builtin =
            Builtin::from_id(raw).ok_or(GenerateError::UnknownBuiltin { node: id, id: raw })?;
        Ok((builtin, args))
    }

    fn expect_children(&self, id: NodeId, expected: usize) -> Result<&[NodeId], GenerateError> {
        let children = self.ast.children(id);
        if children.len() == expected {
            Ok(children)
        } else {
            Err(self.malformed(id))
        }
    }

    /// Sampler operand: a reference to a buffer input.
    fn check_buffer(&self, id: NodeId) -> Result<(), GenerateError> {
        let node = self.ast.get(id);
        if node.kind() != NodeKind::Var || !node.ty().is_buffer() {
            return Err(self.unexpected(id, "buffer reference"));
        }
        Ok(())
    }

    fn malformed(&self, id: NodeId) -> GenerateError {
        GenerateError::MalformedNode {
            node: id,
            kind: self.ast.kind(id),
            found: self.ast.children(id).len(),
        }
    }

    fn unexpected(&self, id: NodeId, context: &'static str) -> GenerateError {
        GenerateError::UnexpectedNode {
            node: id,
            kind: self.ast.kind(id),
            context,
        }
    }
}

/// Infix spelling of a binary operator kind.
fn binary_op(kind: NodeKind) -> Option<&'static str> {
    let op = match kind {
        NodeKind::Equal => "==",
        NodeKind::NotEqual => "!=",
        NodeKind::Greater => ">",
        NodeKind::GreaterEqual => ">=",
        NodeKind::Less => "<",
        NodeKind::LessEqual => "<=",
        NodeKind::LogicalAnd => "&&",
        NodeKind::LogicalOr => "||",
        NodeKind::BitwiseAnd => "&",
        NodeKind::BitwiseOr => "|",
        NodeKind::BitwiseXor => "^",
        NodeKind::ShiftLeft => "<<",
        NodeKind::ShiftRight => ">>",
        NodeKind::Add => "+",
        NodeKind::Subtract => "-",
        NodeKind::Multiply => "*",
        NodeKind::Divide => "/",
        NodeKind::Modulo => "%",
        _ => return None,
    };
    Some(op)
}

/// Literal in GLSL syntax. Non-finite floats and `i32::MIN` have no direct
/// spelling and are written as constant expressions.
pub(super) fn literal(value: LiteralValue) -> String {
    match value {
        LiteralValue::Bool(v) => v.to_string(),
        LiteralValue::Int(i32::MIN) => "(-2147483647 - 1)".to_string(),
        LiteralValue::Int(v) => v.to_string(),
        LiteralValue::UInt(v) => format!("{v}u"),
        LiteralValue::Float(v) if v.is_nan() => "(0.0 / 0.0)".to_string(),
        LiteralValue::Float(v) if v.is_infinite() && v > 0.0 => "(1.0 / 0.0)".to_string(),
        LiteralValue::Float(v) if v.is_infinite() => "(-1.0 / 0.0)".to_string(),
        LiteralValue::Float(v) => float_literal(v),
    }
}

/// Shortest round-trip decimal, always with a fraction or exponent.
fn float_literal(v: f32) -> String {
    let text = format!("{v:?}");
    if text.contains(['.', 'e', 'E']) {
        text
    } else {
        format!("{text}.0")
    }
}
