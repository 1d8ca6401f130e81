//! Operators. Each builds one node over its lowered operands and returns a
//! pending value; nothing is appended to the current block.

use super::{Session, TraceError};
use crate::ast::{Node, NodeKind};
use crate::value::{
    Arith, Bitwise, Bool, Equality, Integral, Modulo, Operand, Ordered, Product, Quotient,
    ShaderType, Shift, SignedGen, Value,
};

impl Session {
    pub(crate) fn unary<T: ShaderType>(
        &mut self,
        kind: NodeKind,
        operand: impl Operand,
    ) -> Result<Value<T>, TraceError> {
        let node = self.ast.alloc(Node::new(kind, T::TYPE));
        self.attach(node, operand)?;
        Ok(Value::pending(node))
    }

    pub(crate) fn binary<T: ShaderType>(
        &mut self,
        kind: NodeKind,
        lhs: impl Operand,
        rhs: impl Operand,
    ) -> Result<Value<T>, TraceError> {
        let node = self.ast.alloc(Node::new(kind, T::TYPE));
        self.attach(node, lhs)?;
        self.attach(node, rhs)?;
        Ok(Value::pending(node))
    }

    pub fn add<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<<L::Ty as Arith<R::Ty>>::Output>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Arith<R::Ty>,
    {
        self.binary(NodeKind::Add, lhs, rhs)
    }

    pub fn sub<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<<L::Ty as Arith<R::Ty>>::Output>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Arith<R::Ty>,
    {
        self.binary(NodeKind::Subtract, lhs, rhs)
    }

    pub fn mul<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<<L::Ty as Product<R::Ty>>::Output>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Product<R::Ty>,
    {
        self.binary(NodeKind::Multiply, lhs, rhs)
    }

    pub fn div<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<<L::Ty as Quotient<R::Ty>>::Output>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Quotient<R::Ty>,
    {
        self.binary(NodeKind::Divide, lhs, rhs)
    }

    pub fn rem<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<<L::Ty as Modulo<R::Ty>>::Output>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Modulo<R::Ty>,
    {
        self.binary(NodeKind::Modulo, lhs, rhs)
    }

    pub fn neg<A>(&mut self, operand: A) -> Result<Value<A::Ty>, TraceError>
    where
        A: Operand,
        A::Ty: SignedGen,
    {
        self.unary(NodeKind::Negate, operand)
    }

    pub fn eq<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<Bool>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Equality<R::Ty>,
    {
        self.binary(NodeKind::Equal, lhs, rhs)
    }

    pub fn ne<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<Bool>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Equality<R::Ty>,
    {
        self.binary(NodeKind::NotEqual, lhs, rhs)
    }

    pub fn lt<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<Bool>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Ordered<R::Ty>,
    {
        self.binary(NodeKind::Less, lhs, rhs)
    }

    pub fn le<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<Bool>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Ordered<R::Ty>,
    {
        self.binary(NodeKind::LessEqual, lhs, rhs)
    }

    pub fn gt<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<Bool>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Ordered<R::Ty>,
    {
        self.binary(NodeKind::Greater, lhs, rhs)
    }

    pub fn ge<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<Bool>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Ordered<R::Ty>,
    {
        self.binary(NodeKind::GreaterEqual, lhs, rhs)
    }

    pub fn and<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<Bool>, TraceError>
    where
        L: Operand<Ty = Bool>,
        R: Operand<Ty = Bool>,
    {
        self.binary(NodeKind::LogicalAnd, lhs, rhs)
    }

    pub fn or<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<Bool>, TraceError>
    where
        L: Operand<Ty = Bool>,
        R: Operand<Ty = Bool>,
    {
        self.binary(NodeKind::LogicalOr, lhs, rhs)
    }

    pub fn not<A: Operand<Ty = Bool>>(&mut self, operand: A) -> Result<Value<Bool>, TraceError> {
        self.unary(NodeKind::LogicalNot, operand)
    }

    pub fn bit_and<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<L::Ty>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Bitwise<R::Ty>,
    {
        self.binary(NodeKind::BitwiseAnd, lhs, rhs)
    }

    pub fn bit_or<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<L::Ty>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Bitwise<R::Ty>,
    {
        self.binary(NodeKind::BitwiseOr, lhs, rhs)
    }

    pub fn bit_xor<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<L::Ty>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Bitwise<R::Ty>,
    {
        self.binary(NodeKind::BitwiseXor, lhs, rhs)
    }

    pub fn bit_not<A>(&mut self, operand: A) -> Result<Value<A::Ty>, TraceError>
    where
        A: Operand,
        A::Ty: Integral,
    {
        self.unary(NodeKind::BitwiseNot, operand)
    }

    pub fn shl<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<L::Ty>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Shift<R::Ty>,
    {
        self.binary(NodeKind::ShiftLeft, lhs, rhs)
    }

    pub fn shr<L, R>(&mut self, lhs: L, rhs: R) -> Result<Value<L::Ty>, TraceError>
    where
        L: Operand,
        R: Operand,
        L::Ty: Shift<R::Ty>,
    {
        self.binary(NodeKind::ShiftRight, lhs, rhs)
    }
}
