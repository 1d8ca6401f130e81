use tessel_core::ValueType;

use super::*;
use crate::ast::{Lane, NodeKind};
use crate::test_utils::ast_of;
use crate::value::{Float, Float2, Float3, Int, Value};

#[test]
fn declarations_belong_in_their_section() {
    let err = trace(|s| s.main(|s| s.input::<Float>("a").map(drop))).unwrap_err();
    assert_eq!(
        err,
        TraceError::MisplacedDeclaration {
            expected: NodeKind::ConstData,
            found: NodeKind::Main
        }
    );

    let err = trace(|s| s.const_data(|s| s.output::<Float>("a").map(drop))).unwrap_err();
    assert_eq!(
        err,
        TraceError::MisplacedDeclaration {
            expected: NodeKind::OutData,
            found: NodeKind::ConstData
        }
    );
}

#[test]
fn names_must_be_declarable() {
    for name in ["", "1x", "gl_Color", "a__b", "has space"] {
        let err = trace(|s| s.const_data(|s| s.input::<Float>(name).map(drop))).unwrap_err();
        assert_eq!(err, TraceError::InvalidName(name.to_string()));
    }
}

#[test]
fn names_are_unique_across_sections() {
    let err = trace(|s| {
        s.const_data(|s| s.input::<Float>("x").map(drop))?;
        s.out_data(|s| s.output::<Float>("x").map(drop))
    })
    .unwrap_err();

    assert_eq!(err, TraceError::DuplicateName("x".to_string()));
}

#[test]
fn first_assignment_allocates_one_symbol() {
    let mut s = Session::new();
    s.enter_block(NodeKind::Main).unwrap();

    let mut v = Value::<Int>::unbound();
    assert!(!v.is_materialized());
    s.assign(&mut v, 1).unwrap();
    let symbol = v.symbol().unwrap();
    s.assign(&mut v, 2).unwrap();
    s.add_assign(&mut v, 3).unwrap();

    assert_eq!(v.symbol(), Some(symbol));
    assert_eq!(s.symbol_count(), 1);
}

#[test]
fn reading_unassigned_value_fails() {
    let mut s = Session::new();
    s.enter_block(NodeKind::Main).unwrap();
    let v = Value::<Float>::unbound();

    assert_eq!(
        s.add(&v, 1.0f32).unwrap_err(),
        TraceError::UninitializedRead {
            ty: ValueType::FLOAT
        }
    );
}

#[test]
fn failed_assignment_leaves_target_unbound() {
    let mut s = Session::new();
    s.enter_block(NodeKind::Main).unwrap();
    let unset = Value::<Float>::unbound();
    let mut target = Value::<Float>::unbound();

    assert_eq!(
        s.assign(&mut target, &unset).unwrap_err(),
        TraceError::UninitializedRead {
            ty: ValueType::FLOAT
        }
    );
    assert!(!target.is_materialized());
    assert_eq!(s.symbol_count(), 0);
    assert!(s.ast().children(s.current_block()).is_empty());

    s.assign(&mut target, 2.0f32).unwrap();
    assert_eq!(target.symbol().map(|symbol| symbol.as_u32()), Some(0));
}

#[test]
fn statements_need_a_statement_block() {
    let err = trace(|s| {
        s.const_data(|s| {
            let _v = s.var(1.0f32)?;
            Ok(())
        })
    })
    .unwrap_err();

    assert_eq!(err, TraceError::MisplacedStatement(NodeKind::ConstData));
}

#[test]
fn input_lanes_are_read_only() {
    let err = trace(|s| {
        let p = s.const_data(|s| s.input::<Float3>("p"))?;
        s.main(|s| {
            let mut z = p.z();
            s.assign(&mut z, 0.0f32)
        })
    })
    .unwrap_err();

    assert_eq!(err, TraceError::ReadOnlyTarget);
}

#[test]
fn lanes_are_bounded_by_the_vector() {
    let mut s = Session::new();
    s.enter_block(NodeKind::Main).unwrap();
    let mut v = Value::<Float2>::unbound();

    assert_eq!(
        s.lane(&mut v, Lane::Z).unwrap_err(),
        TraceError::LaneOutOfRange {
            lane: Lane::Z,
            ty: ValueType::FLOAT2
        }
    );
}

#[test]
fn materialize_binds_pending_values_once() {
    let mut s = Session::new();
    s.enter_block(NodeKind::Main).unwrap();

    let mut sum = s.add(1.0f32, 2.0f32).unwrap();
    let symbol = s.materialize(&mut sum).unwrap();
    assert_eq!(s.materialize(&mut sum).unwrap(), symbol);
    assert_eq!(s.ast().children(s.current_block()).len(), 1);

    let mut v = Value::<Float2>::unbound();
    let mut lane = s.x(&mut v).unwrap();
    assert!(lane.is_member());
    assert_eq!(
        s.materialize(&mut lane).unwrap_err(),
        TraceError::NotAddressable
    );
}

#[test]
fn compound_assignments() {
    let dump = ast_of(|s| {
        s.main(|s| {
            let mut v = s.var(8.0f32)?;
            s.sub_assign(&mut v, 1.0f32)?;
            s.mul_assign(&mut v, 2.0f32)?;
            s.div_assign(&mut v, 4.0f32)
        })
    });

    insta::assert_snapshot!(dump, @r"
    Program
      Main
        Assignment float
          Var float $0
          Literal float 8.0
        Assignment float
          Var float $0
          Subtract float
            Var float $0
            Literal float 1.0
        Assignment float
          Var float $0
          Multiply float
            Var float $0
            Literal float 2.0
        Assignment float
          Var float $0
          Divide float
            Var float $0
            Literal float 4.0
    ");
}

#[test]
fn lane_assignment_targets_owner() {
    let dump = ast_of(|s| {
        s.main(|s| {
            let mut v = Value::<Float2>::unbound();
            let mut y = s.y(&mut v)?;
            s.assign(&mut y, 0.5f32)
        })
    });

    insta::assert_snapshot!(dump, @r"
    Program
      Main
        Assignment float
          Member float $0.y
          Literal float 0.5
    ");
}
