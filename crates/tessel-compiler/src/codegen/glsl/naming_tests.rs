use tessel_core::{Builtin, ValueType};

use super::intrinsics::{self, Intrinsic, NORMALIZED_INDEX_EXPR};
use super::naming::{DISPATCH_SIZE, ident_for, is_reserved, local_name, texel_swizzle, type_name};
use crate::ast::SymbolId;

#[test]
fn user_names_are_kept_when_free() {
    assert_eq!(ident_for("a"), "a");
    assert_eq!(ident_for("result"), "result");
    assert_eq!(ident_for("v"), "v");
    assert_eq!(ident_for("v1x"), "v1x");
}

#[test]
fn colliding_names_are_mangled() {
    assert_eq!(ident_for("out"), "out_");
    assert_eq!(ident_for("main"), "main_");
    assert_eq!(ident_for("texelFetch"), "texelFetch_");
    assert_eq!(ident_for("dispatch_size"), "dispatch_size_");
    assert_eq!(ident_for("v12"), "v12_");
    assert!(is_reserved("sampler2DRect"));
    assert!(!is_reserved("img"));
}

#[test]
fn locals_are_numbered() {
    assert_eq!(local_name(SymbolId::from_raw(0)), "v0");
    assert_eq!(local_name(SymbolId::from_raw(41)), "v41");
}

#[test]
fn type_spellings() {
    assert_eq!(type_name(ValueType::BOOL), Some("bool"));
    assert_eq!(type_name(ValueType::UINT3), Some("uvec3"));
    assert_eq!(type_name(ValueType::FLOAT4), Some("vec4"));
    assert_eq!(type_name(ValueType::VOID), None);
    assert_eq!(
        type_name(ValueType::buffer_1d(ValueType::INT2)),
        Some("isamplerBuffer")
    );
    assert_eq!(
        type_name(ValueType::buffer_2d(ValueType::FLOAT)),
        Some("sampler2DRect")
    );
    assert_eq!(
        type_name(ValueType::buffer_2d(ValueType::UINT4)),
        Some("usampler2DRect")
    );
    assert_eq!(type_name(ValueType::buffer_1d(ValueType::BOOL)), None);
}

#[test]
fn texel_swizzles() {
    assert_eq!(texel_swizzle(1), ".x");
    assert_eq!(texel_swizzle(3), ".xyz");
    assert_eq!(texel_swizzle(4), "");
}

#[test]
fn every_builtin_lowers() {
    for builtin in Builtin::ALL {
        match intrinsics::intrinsic(builtin) {
            Intrinsic::Call(name) => {
                assert!(builtin.arity() > 0, "{builtin}");
                assert!(is_reserved(name), "{name}");
            }
            Intrinsic::Expr(_) => assert_eq!(builtin.arity(), 0, "{builtin}"),
        }
    }
    assert_eq!(
        intrinsics::intrinsic(Builtin::Ceiling),
        Intrinsic::Call("ceil")
    );
    assert!(NORMALIZED_INDEX_EXPR.contains(DISPATCH_SIZE));
}
