//! Constructors, casts, built-in functions, index queries and sampling.

use tessel_core::{Builtin, ValueType};

use super::{Session, TraceError};
use crate::ast::{LiteralValue, Node, NodeId, NodeKind};
use crate::value::{
    Bool, Buffer1D, Buffer2D, CastTo, Element, Float, Float2, Float3, FloatGen, Input, Int, Int2,
    Numeric, Operand, ShaderType, SignedGen, Value, Vector2, Vector3, Vector4,
};

impl Session {
    pub fn construct2<V, A, B>(&mut self, a: A, b: B) -> Result<Value<V>, TraceError>
    where
        V: Vector2,
        A: Operand<Ty = V::Lane>,
        B: Operand<Ty = V::Lane>,
    {
        let node = self.ast.alloc(Node::new(NodeKind::Constructor, V::TYPE));
        self.attach(node, a)?;
        self.attach(node, b)?;
        Ok(Value::pending(node))
    }

    pub fn construct3<V, A, B, C>(&mut self, a: A, b: B, c: C) -> Result<Value<V>, TraceError>
    where
        V: Vector3,
        A: Operand<Ty = V::Lane>,
        B: Operand<Ty = V::Lane>,
        C: Operand<Ty = V::Lane>,
    {
        let node = self.ast.alloc(Node::new(NodeKind::Constructor, V::TYPE));
        self.attach(node, a)?;
        self.attach(node, b)?;
        self.attach(node, c)?;
        Ok(Value::pending(node))
    }

    pub fn construct4<V, A, B, C, D>(
        &mut self,
        a: A,
        b: B,
        c: C,
        d: D,
    ) -> Result<Value<V>, TraceError>
    where
        V: Vector4,
        A: Operand<Ty = V::Lane>,
        B: Operand<Ty = V::Lane>,
        C: Operand<Ty = V::Lane>,
        D: Operand<Ty = V::Lane>,
    {
        let node = self.ast.alloc(Node::new(NodeKind::Constructor, V::TYPE));
        self.attach(node, a)?;
        self.attach(node, b)?;
        self.attach(node, c)?;
        self.attach(node, d)?;
        Ok(Value::pending(node))
    }

    pub fn cast<T, A>(&mut self, operand: A) -> Result<Value<T>, TraceError>
    where
        T: ShaderType,
        A: Operand,
        A::Ty: CastTo<T>,
    {
        self.unary(NodeKind::Cast, operand)
    }

    /// Integer coordinate of the element being computed.
    pub fn index(&mut self) -> Value<Int2> {
        Value::pending(self.ast.alloc(Node::new(NodeKind::Index, ValueType::INT2)))
    }

    /// Coordinate of the element being computed, scaled to `[0, 1)`.
    pub fn normalized_index(&mut self) -> Value<Float2> {
        Value::pending(
            self.ast
                .alloc(Node::new(NodeKind::NormalizedIndex, ValueType::FLOAT2)),
        )
    }

    pub fn sample1d<E, I>(&mut self, buffer: &Input<Buffer1D<E>>, index: I) -> Result<Value<E>, TraceError>
    where
        E: Element,
        I: Operand<Ty = Int>,
    {
        check_index(&index)?;
        let node = self.ast.alloc(Node::new(NodeKind::Sample1D, E::TYPE));
        self.attach(node, buffer)?;
        self.attach(node, index)?;
        Ok(Value::pending(node))
    }

    pub fn sample2d<E, X, Y>(
        &mut self,
        buffer: &Input<Buffer2D<E>>,
        x: X,
        y: Y,
    ) -> Result<Value<E>, TraceError>
    where
        E: Element,
        X: Operand<Ty = Int>,
        Y: Operand<Ty = Int>,
    {
        check_index(&x)?;
        check_index(&y)?;
        let node = self.ast.alloc(Node::new(NodeKind::Sample2D, E::TYPE));
        self.attach(node, buffer)?;
        self.attach(node, x)?;
        self.attach(node, y)?;
        Ok(Value::pending(node))
    }

    /// Sample at a two-lane coordinate. The coordinate is materialized and
    /// its lanes become the two index children.
    pub fn sample2d_at<E: Element>(
        &mut self,
        buffer: &Input<Buffer2D<E>>,
        index: Value<Int2>,
    ) -> Result<Value<E>, TraceError> {
        let mut index = index;
        let x = self.x(&mut index)?;
        let y = self.y(&mut index)?;
        self.sample2d(buffer, x, y)
    }

    fn call_node(&mut self, builtin: Builtin, ty: ValueType) -> Result<NodeId, TraceError> {
        let node = self.ast.alloc(Node::new(NodeKind::Function, ty));
        self.attach(node, builtin.id())?;
        Ok(node)
    }

    fn call1<T: ShaderType>(
        &mut self,
        builtin: Builtin,
        a: impl Operand,
    ) -> Result<Value<T>, TraceError> {
        let node = self.call_node(builtin, T::TYPE)?;
        self.attach(node, a)?;
        Ok(Value::pending(node))
    }

    fn call2<T: ShaderType>(
        &mut self,
        builtin: Builtin,
        a: impl Operand,
        b: impl Operand,
    ) -> Result<Value<T>, TraceError> {
        let node = self.call_node(builtin, T::TYPE)?;
        self.attach(node, a)?;
        self.attach(node, b)?;
        Ok(Value::pending(node))
    }

    fn call3<T: ShaderType>(
        &mut self,
        builtin: Builtin,
        a: impl Operand,
        b: impl Operand,
        c: impl Operand,
    ) -> Result<Value<T>, TraceError> {
        let node = self.call_node(builtin, T::TYPE)?;
        self.attach(node, a)?;
        self.attach(node, b)?;
        self.attach(node, c)?;
        Ok(Value::pending(node))
    }

    pub fn pow<A, B>(&mut self, base: A, exponent: B) -> Result<Value<A::Ty>, TraceError>
    where
        A: Operand,
        B: Operand<Ty = A::Ty>,
        A::Ty: FloatGen,
    {
        self.call2(Builtin::Pow, base, exponent)
    }

    pub fn abs<A>(&mut self, a: A) -> Result<Value<A::Ty>, TraceError>
    where
        A: Operand,
        A::Ty: SignedGen,
    {
        self.call1(Builtin::Abs, a)
    }

    pub fn sign<A>(&mut self, a: A) -> Result<Value<A::Ty>, TraceError>
    where
        A: Operand,
        A::Ty: SignedGen,
    {
        self.call1(Builtin::Sign, a)
    }

    pub fn min<A, B>(&mut self, a: A, b: B) -> Result<Value<A::Ty>, TraceError>
    where
        A: Operand,
        B: Operand<Ty = A::Ty>,
        A::Ty: Numeric,
    {
        self.call2(Builtin::Min, a, b)
    }

    pub fn max<A, B>(&mut self, a: A, b: B) -> Result<Value<A::Ty>, TraceError>
    where
        A: Operand,
        B: Operand<Ty = A::Ty>,
        A::Ty: Numeric,
    {
        self.call2(Builtin::Max, a, b)
    }

    pub fn clamp<A, B, C>(&mut self, x: A, lo: B, hi: C) -> Result<Value<A::Ty>, TraceError>
    where
        A: Operand,
        B: Operand<Ty = A::Ty>,
        C: Operand<Ty = A::Ty>,
        A::Ty: Numeric,
    {
        self.call3(Builtin::Clamp, x, lo, hi)
    }

    pub fn is_nan<A: Operand<Ty = Float>>(&mut self, a: A) -> Result<Value<Bool>, TraceError> {
        self.call1(Builtin::IsNan, a)
    }

    pub fn is_inf<A: Operand<Ty = Float>>(&mut self, a: A) -> Result<Value<Bool>, TraceError> {
        self.call1(Builtin::IsInf, a)
    }

    pub fn length<A>(&mut self, a: A) -> Result<Value<Float>, TraceError>
    where
        A: Operand,
        A::Ty: FloatGen,
    {
        self.call1(Builtin::Length, a)
    }

    pub fn distance<A, B>(&mut self, a: A, b: B) -> Result<Value<Float>, TraceError>
    where
        A: Operand,
        B: Operand<Ty = A::Ty>,
        A::Ty: FloatGen,
    {
        self.call2(Builtin::Distance, a, b)
    }

    pub fn dot<A, B>(&mut self, a: A, b: B) -> Result<Value<Float>, TraceError>
    where
        A: Operand,
        B: Operand<Ty = A::Ty>,
        A::Ty: FloatGen,
    {
        self.call2(Builtin::Dot, a, b)
    }

    pub fn cross<A, B>(&mut self, a: A, b: B) -> Result<Value<Float3>, TraceError>
    where
        A: Operand<Ty = Float3>,
        B: Operand<Ty = Float3>,
    {
        self.call2(Builtin::Cross, a, b)
    }
}

macro_rules! float_functions {
    ($($method:ident => $builtin:ident),* $(,)?) => {
        impl Session {
            $(
                pub fn $method<A>(&mut self, a: A) -> Result<Value<A::Ty>, TraceError>
                where
                    A: Operand,
                    A::Ty: FloatGen,
                {
                    self.call1(Builtin::$builtin, a)
                }
            )*
        }
    };
}

float_functions! {
    sin => Sin,
    cos => Cos,
    tan => Tan,
    asin => ASin,
    acos => ACos,
    atan => ATan,
    sinh => SinH,
    cosh => CosH,
    tanh => TanH,
    asinh => ASinH,
    acosh => ACosH,
    atanh => ATanH,
    exp => Exp,
    log => Log,
    exp2 => Exp2,
    log2 => Log2,
    sqrt => Sqrt,
    floor => Floor,
    ceil => Ceiling,
    normalize => Normalize,
}

fn check_index(index: &impl Operand) -> Result<(), TraceError> {
    match index.literal() {
        Some(LiteralValue::Int(value)) if value < 0 => Err(TraceError::NegativeIndex(value)),
        _ => Ok(()),
    }
}
