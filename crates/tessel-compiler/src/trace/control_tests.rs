use super::*;
use crate::ast::NodeKind;
use crate::test_utils::ast_of;
use crate::value::{Float, Int, ShaderType, Value};

#[test]
fn if_chain_with_begin_forms() {
    let dump = ast_of(|s| {
        let x = s.const_data(|s| s.input::<Int>("x"))?;
        s.enter_block(NodeKind::Main)?;
        let neg = s.lt(x, 0)?;
        s.begin_if(neg)?;
        let _a = s.var(1)?;
        let zero = s.eq(x, 0)?;
        s.begin_else_if(zero)?;
        let _b = s.var(2)?;
        s.begin_else()?;
        let _c = s.var(3)?;
        s.exit_block()?;
        s.exit_block()?;
        Ok(())
    });

    insta::assert_snapshot!(dump, @r#"
    Program
      ConstData
        ConstVar int $0 "x"
      Main
        If
          Less bool
            Var int $0
            Literal int 0
          Assignment int
            Var int $1
            Literal int 1
        ElseIf
          Equal bool
            Var int $0
            Literal int 0
          Assignment int
            Var int $2
            Literal int 2
        Else
          Assignment int
            Var int $3
            Literal int 3
    "#);
}

#[test]
fn else_needs_a_preceding_conditional() {
    let err = trace(|s| s.main(|s| s.else_(|_| Ok(())))).unwrap_err();
    assert_eq!(err, TraceError::DanglingElse(NodeKind::Else));

    let err = trace(|s| {
        s.main(|s| {
            let _v = s.var(1.0f32)?;
            let cond = s.var(true)?;
            s.else_if(&cond, |_| Ok(()))
        })
    })
    .unwrap_err();
    assert_eq!(err, TraceError::DanglingElse(NodeKind::ElseIf));

    let err = trace(|s| s.main(|s| s.begin_else())).unwrap_err();
    assert_eq!(err, TraceError::DanglingElse(NodeKind::Else));
}

#[test]
fn while_loop() {
    let dump = ast_of(|s| {
        s.main(|s| {
            let mut n = s.var(0.0f32)?;
            let cond = s.lt(&n, 1.0f32)?;
            s.while_(cond, |s| s.add_assign(&mut n, 0.25f32))
        })
    });

    insta::assert_snapshot!(dump, @r"
    Program
      Main
        Assignment float
          Var float $0
          Literal float 0.0
        While
          Less bool
            Var float $0
            Literal float 1.0
          Assignment float
            Var float $0
            Add float
              Var float $0
              Literal float 0.25
    ");
}

#[test]
fn for_range_binds_an_int_induction_variable() {
    let mut s = Session::new();
    s.enter_block(NodeKind::Main).unwrap();

    let i = s.begin_for_range("i", 0, 8).unwrap();
    assert!(i.is_materialized());
    assert_eq!(i.ty(), Int::TYPE);
    assert_eq!(s.current_kind(), NodeKind::ForRange);

    let node = s.current_block();
    assert_eq!(s.ast().get(node).symbol_id(), i.symbol());
    assert_eq!(s.ast().get(node).name(), Some("i"));
    assert_eq!(s.ast().children(node).len(), 2);
}

#[test]
fn for_range_name_must_be_an_identifier() {
    let err = trace(|s| s.main(|s| s.for_range("2i", 0, 1, |_, _| Ok(())))).unwrap_err();
    assert_eq!(err, TraceError::InvalidName("2i".to_string()));
}

#[test]
fn closure_forms_return_values() {
    let mut s = Session::new();
    let value = s
        .main(|s| {
            let flag = s.var(true)?;
            s.if_(&flag, |s| {
                let v: Value<Float> = s.var(1.0f32)?;
                Ok(v.symbol())
            })
        })
        .unwrap();

    assert_eq!(value.map(|symbol| symbol.as_u32()), Some(1));
    assert_eq!(s.depth(), 1);
}
