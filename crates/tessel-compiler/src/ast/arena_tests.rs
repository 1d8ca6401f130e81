use tessel_core::ValueType;

use super::*;

fn literal(ast: &mut Ast, v: f32) -> NodeId {
    ast.alloc(Node::literal(LiteralValue::Float(v)))
}

#[test]
fn add_child_links_parent() {
    let mut ast = Ast::new();
    let add = ast.alloc(Node::new(NodeKind::Add, ValueType::FLOAT));
    let a = literal(&mut ast, 1.0);
    let b = literal(&mut ast, 2.0);

    ast.add_child(add, a).unwrap();
    ast.add_child(add, b).unwrap();

    assert_eq!(ast.children(add), &[a, b]);
    assert_eq!(ast.get(a).parent(), Some(add));
    assert!(ast.is_attached(b));
    assert!(!ast.is_attached(add));
}

#[test]
fn arity_is_enforced() {
    let mut ast = Ast::new();
    let neg = ast.alloc(Node::new(NodeKind::Negate, ValueType::FLOAT));
    let a = literal(&mut ast, 1.0);
    let b = literal(&mut ast, 2.0);

    ast.add_child(neg, a).unwrap();
    let err = ast.add_child(neg, b).unwrap_err();

    assert_eq!(
        err,
        AstError::ArityExceeded {
            parent: neg,
            kind: NodeKind::Negate,
            max: 1
        }
    );
    assert!(!ast.is_attached(b));
}

#[test]
fn children_are_owned_exclusively() {
    let mut ast = Ast::new();
    let first = ast.alloc(Node::new(NodeKind::Negate, ValueType::FLOAT));
    let second = ast.alloc(Node::new(NodeKind::Negate, ValueType::FLOAT));
    let a = literal(&mut ast, 1.0);

    ast.add_child(first, a).unwrap();
    let err = ast.add_child(second, a).unwrap_err();

    assert_eq!(
        err,
        AstError::AlreadyAttached {
            child: a,
            parent: first
        }
    );
}

#[test]
fn attached_expressions_are_sealed() {
    let mut ast = Ast::new();
    let main = ast.alloc(Node::new(NodeKind::Main, ValueType::VOID));
    let cast = ast.alloc(Node::new(NodeKind::Constructor, ValueType::FLOAT2));
    let a = literal(&mut ast, 1.0);
    let b = literal(&mut ast, 2.0);

    ast.add_child(cast, a).unwrap();
    ast.add_child(main, cast).unwrap();
    let err = ast.add_child(cast, b).unwrap_err();

    assert!(matches!(err, AstError::Sealed { kind: NodeKind::Constructor, .. }));
}

#[test]
fn cycles_are_rejected() {
    let mut ast = Ast::new();
    let outer = ast.alloc(Node::new(NodeKind::Block, ValueType::VOID));
    let inner = ast.alloc(Node::new(NodeKind::Block, ValueType::VOID));

    ast.add_child(outer, inner).unwrap();
    let err = ast.add_child(inner, outer).unwrap_err();
    assert_eq!(err, AstError::Cycle { parent: inner, child: outer });

    let err = ast.add_child(outer, outer).unwrap_err();
    assert_eq!(err, AstError::Cycle { parent: outer, child: outer });
}

#[test]
fn deep_clone_copies_subtree() {
    let mut ast = Ast::new();
    let add = ast.alloc(Node::new(NodeKind::Add, ValueType::FLOAT));
    let a = literal(&mut ast, 1.0);
    let b = literal(&mut ast, 2.0);
    ast.add_child(add, a).unwrap();
    ast.add_child(add, b).unwrap();

    let copy = ast.deep_clone(add);

    assert_ne!(copy, add);
    assert!(!ast.is_attached(copy));
    assert_eq!(ast.kind(copy), NodeKind::Add);
    let children = ast.children(copy).to_vec();
    assert_eq!(children.len(), 2);
    assert!(children.iter().all(|c| *c != a && *c != b));
    assert_eq!(ast.get(children[1]).literal_value(), Some(LiteralValue::Float(2.0)));
    assert_eq!(ast.get(children[0]).parent(), Some(copy));
    assert_eq!(ast.len(), 6);
}

#[test]
fn deep_clone_copies_deep_chains() {
    const DEPTH: usize = 10_000;
    let mut ast = Ast::new();
    let mut top = literal(&mut ast, 1.0);
    for _ in 0..DEPTH {
        let neg = ast.alloc(Node::new(NodeKind::Negate, ValueType::FLOAT));
        ast.add_child(neg, top).unwrap();
        top = neg;
    }

    let copy = ast.deep_clone(top);

    assert!(!ast.is_attached(copy));
    assert_eq!(ast.len(), 2 * (DEPTH + 1));
    let copied: Vec<_> = ast.preorder(copy).collect();
    assert_eq!(copied.len(), DEPTH + 1);
    assert!(copied.iter().all(|&id| id.as_u32() as usize > DEPTH));
    let leaf = *copied.last().unwrap();
    assert_eq!(ast.get(leaf).literal_value(), Some(LiteralValue::Float(1.0)));
}

#[test]
fn preorder_visits_parents_first() {
    let mut ast = Ast::new();
    let root = ast.alloc(Node::new(NodeKind::Program, ValueType::VOID));
    let main = ast.alloc(Node::new(NodeKind::Main, ValueType::VOID));
    let out = ast.alloc(Node::new(NodeKind::OutData, ValueType::VOID));
    let block = ast.alloc(Node::new(NodeKind::Block, ValueType::VOID));
    ast.add_child(root, out).unwrap();
    ast.add_child(root, main).unwrap();
    ast.add_child(main, block).unwrap();

    let order: Vec<_> = ast.preorder(root).collect();
    assert_eq!(order, vec![root, out, main, block]);
}

#[test]
fn literal_bytes() {
    let value = LiteralValue::Float(2.0);
    let bytes = value.to_le_bytes();
    assert_eq!(bytes, 2.0f32.to_le_bytes().to_vec());
    assert_eq!(LiteralValue::from_le_bytes(ValueType::FLOAT, &bytes), Some(value));
    assert_eq!(LiteralValue::from_le_bytes(ValueType::BOOL, &[1]), Some(LiteralValue::Bool(true)));
    assert_eq!(LiteralValue::from_le_bytes(ValueType::INT, &[1, 2]), None);
    assert_eq!(LiteralValue::from_le_bytes(ValueType::FLOAT2, &bytes), None);
}

#[test]
fn arity_table() {
    assert!(NodeKind::Sample2D.arity().admits(3));
    assert!(!NodeKind::Sample2D.arity().admits(2));
    assert!(NodeKind::Main.arity().admits(100));
    assert!(!NodeKind::ForRange.arity().admits(1));
    assert!(NodeKind::Function.arity().admits(1));
    assert!(!NodeKind::Function.arity().admits(5));
    assert_eq!(NodeKind::While.header_len(), 1);
    assert!(NodeKind::Else.accepts_statements());
    assert!(!NodeKind::OutData.accepts_statements());
}
