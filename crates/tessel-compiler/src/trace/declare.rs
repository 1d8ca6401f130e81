//! Declarations, assignment and member access.

use tessel_core::{ValueType, utils};

use super::{Session, TraceError};
use crate::ast::{Lane, Node, NodeKind, SymbolId};
use crate::value::{
    Arith, HasW, HasZ, Input, InputType, Operand, OutputType, Product, Quotient, Repr, ShaderType,
    Value, VectorType,
};

impl Session {
    /// Declare a const input. Only valid inside the `ConstData` section.
    pub fn input<T: InputType>(&mut self, name: &str) -> Result<Input<T>, TraceError> {
        let symbol = self.declare(NodeKind::ConstVar, NodeKind::ConstData, T::TYPE, name)?;
        Ok(Input::new(symbol))
    }

    /// Declare an output. Only valid inside the `OutData` section.
    pub fn output<T: OutputType>(&mut self, name: &str) -> Result<Value<T>, TraceError> {
        let symbol = self.declare(NodeKind::OutVar, NodeKind::OutData, T::TYPE, name)?;
        Ok(Value::bound(symbol))
    }

    fn declare(
        &mut self,
        kind: NodeKind,
        section: NodeKind,
        ty: ValueType,
        name: &str,
    ) -> Result<SymbolId, TraceError> {
        let found = self.current_kind();
        if found != section {
            return Err(TraceError::MisplacedDeclaration {
                expected: section,
                found,
            });
        }
        if !utils::is_declarable(name) {
            return Err(TraceError::InvalidName(name.to_string()));
        }
        if !self.names.insert(name.to_string()) {
            return Err(TraceError::DuplicateName(name.to_string()));
        }

        let symbol = self.next_symbol();
        let node = self.ast.alloc(Node::symbol(kind, ty, symbol).named(name));
        let block = self.current_block();
        self.ast.add_child(block, node)?;
        tracing::debug!(%kind, %ty, name, %symbol, "declare");
        Ok(symbol)
    }

    /// Record `target = value`.
    ///
    /// A target without a symbol gets one here, so the first assignment to
    /// a handle allocates exactly one symbol and later ones allocate none.
    /// The target is left untouched when the assignment fails.
    pub fn assign<T, A>(&mut self, target: &mut Value<T>, value: A) -> Result<(), TraceError>
    where
        T: ShaderType,
        A: Operand<Ty = T>,
    {
        self.ensure_statements()?;
        if let Repr::Member { writable: false, .. } = target.repr {
            return Err(TraceError::ReadOnlyTarget);
        }
        let rhs = value.lower(self)?;

        let (lhs, fresh) = match target.repr {
            Repr::Member {
                owner,
                owner_type,
                lane,
                ..
            } => (
                self.ast
                    .alloc(Node::member(T::TYPE, owner, owner_type, lane)),
                None,
            ),
            Repr::Bound(symbol) => (self.var_node(T::TYPE, symbol), None),
            Repr::Unbound | Repr::Pending(_) => {
                let symbol = self.next_symbol();
                (self.var_node(T::TYPE, symbol), Some(symbol))
            }
        };

        let node = self.ast.alloc(Node::new(NodeKind::Assignment, T::TYPE));
        self.ast.add_child(node, lhs)?;
        self.ast.add_child(node, rhs)?;
        self.append(node)?;
        if let Some(symbol) = fresh {
            target.repr = Repr::Bound(symbol);
        }
        Ok(())
    }

    /// New variable initialized with `init`.
    pub fn var<A: Operand>(&mut self, init: A) -> Result<Value<A::Ty>, TraceError> {
        let mut value = Value::unbound();
        self.assign(&mut value, init)?;
        Ok(value)
    }

    pub fn add_assign<T, R>(&mut self, target: &mut Value<T>, rhs: R) -> Result<(), TraceError>
    where
        T: Arith<R::Ty, Output = T>,
        R: Operand,
    {
        let value = self.add(&*target, rhs)?;
        self.assign(target, value)
    }

    pub fn sub_assign<T, R>(&mut self, target: &mut Value<T>, rhs: R) -> Result<(), TraceError>
    where
        T: Arith<R::Ty, Output = T>,
        R: Operand,
    {
        let value = self.sub(&*target, rhs)?;
        self.assign(target, value)
    }

    pub fn mul_assign<T, R>(&mut self, target: &mut Value<T>, rhs: R) -> Result<(), TraceError>
    where
        T: Product<R::Ty, Output = T>,
        R: Operand,
    {
        let value = self.mul(&*target, rhs)?;
        self.assign(target, value)
    }

    pub fn div_assign<T, R>(&mut self, target: &mut Value<T>, rhs: R) -> Result<(), TraceError>
    where
        T: Quotient<R::Ty, Output = T>,
        R: Operand,
    {
        let value = self.div(&*target, rhs)?;
        self.assign(target, value)
    }

    /// Give `value` a symbol.
    ///
    /// A pending value is bound through an emitted assignment; an unbound
    /// one only receives a symbol.
    pub fn materialize<T: ShaderType>(
        &mut self,
        value: &mut Value<T>,
    ) -> Result<SymbolId, TraceError> {
        match value.repr {
            Repr::Bound(symbol) => Ok(symbol),
            Repr::Unbound => {
                let symbol = self.next_symbol();
                value.repr = Repr::Bound(symbol);
                Ok(symbol)
            }
            Repr::Pending(_) => {
                let init = value.clone();
                self.assign(value, init)?;
                value.symbol().ok_or(TraceError::NotAddressable)
            }
            Repr::Member { .. } => Err(TraceError::NotAddressable),
        }
    }

    /// Handle to one lane of `value`, materializing `value` first.
    pub fn lane<V: VectorType>(
        &mut self,
        value: &mut Value<V>,
        lane: Lane,
    ) -> Result<Value<V::Lane>, TraceError> {
        if lane.index() >= V::LANES {
            return Err(TraceError::LaneOutOfRange { lane, ty: V::TYPE });
        }
        let owner = self.materialize(value)?;
        Ok(Value::from_repr(Repr::Member {
            owner,
            owner_type: V::TYPE,
            lane,
            writable: true,
        }))
    }

    pub fn x<V: VectorType>(&mut self, value: &mut Value<V>) -> Result<Value<V::Lane>, TraceError> {
        self.lane(value, Lane::X)
    }

    pub fn y<V: VectorType>(&mut self, value: &mut Value<V>) -> Result<Value<V::Lane>, TraceError> {
        self.lane(value, Lane::Y)
    }

    pub fn z<V: HasZ>(&mut self, value: &mut Value<V>) -> Result<Value<V::Lane>, TraceError> {
        self.lane(value, Lane::Z)
    }

    pub fn w<V: HasW>(&mut self, value: &mut Value<V>) -> Result<Value<V::Lane>, TraceError> {
        self.lane(value, Lane::W)
    }
}
