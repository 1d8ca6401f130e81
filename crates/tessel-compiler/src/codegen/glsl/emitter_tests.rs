use tessel_core::{Builtin, ValueType};

use super::{Config, GenerateError, generate, generate_with_config};
use crate::ast::{Ast, LiteralValue, Node, NodeId, NodeKind, SymbolId};
use crate::test_utils::{glsl_of, left_deep_sum, traced};
use crate::trace::Source;
use crate::value::{Buffer1D, Buffer2D, Float, Float2, Float3, Int, UInt, Value};

#[test]
fn add_constant() {
    let glsl = glsl_of(|s| {
        let a = s.const_data(|s| s.input::<Float>("a"))?;
        let mut out = s.out_data(|s| s.output::<Float>("out"))?;
        s.main(|s| {
            let sum = s.add(a, 2.0f32)?;
            s.assign(&mut out, sum)
        })
    });

    insta::assert_snapshot!(glsl, @r"
    #version 330

    uniform float a;

    layout(location = 0) out float out_;

    void main()
    {
        out_ = (a + 2.0);
    }
    ");
}

#[test]
fn if_else_chain() {
    let glsl = glsl_of(|s| {
        let a = s.const_data(|s| s.input::<Float>("a"))?;
        let mut out = s.out_data(|s| s.output::<Float>("result"))?;
        s.main(|s| {
            let square = s.mul(a, a)?;
            let t = s.var(square)?;
            let big = s.gt(&t, 1.0f32)?;
            let small = s.lt(&t, 0.5f32)?;
            s.if_(big, |s| s.assign(&mut out, &t))?;
            s.else_if(small, |s| s.assign(&mut out, -1.0f32))?;
            s.else_(|s| s.assign(&mut out, 0.0f32))
        })
    });

    insta::assert_snapshot!(glsl, @r"
    #version 330

    uniform float a;

    layout(location = 0) out float result;

    void main()
    {
        float v2 = (a * a);
        if (v2 > 1.0)
        {
            result = v2;
        }
        else if (v2 < 0.5)
        {
            result = -1.0;
        }
        else
        {
            result = 0.0;
        }
    }
    ");
}

#[test]
fn counted_loop() {
    let glsl = glsl_of(|s| {
        let mut out = s.out_data(|s| s.output::<Float>("total"))?;
        s.main(|s| {
            let mut acc = s.var(0.0f32)?;
            s.for_range("i", 0, 4, |s, i| {
                let step = s.cast::<Float, _>(i)?;
                s.add_assign(&mut acc, step)
            })?;
            s.assign(&mut out, &acc)
        })
    });

    insta::assert_snapshot!(glsl, @r"
    #version 330

    layout(location = 0) out float total;

    void main()
    {
        float v1 = 0.0;
        for (int v2 = 0; v2 < 4; v2++)
        {
            v1 = (v1 + float(v2));
        }
        total = v1;
    }
    ");
}

#[test]
fn while_loop_and_nested_scope() {
    let glsl = glsl_of(|s| {
        let mut out = s.out_data(|s| s.output::<Int>("steps"))?;
        s.main(|s| {
            let mut n = s.var(0)?;
            let running = s.lt(&n, 10)?;
            s.while_(running, |s| {
                s.scope(|s| {
                    let doubled = s.mul(&n, 2)?;
                    let _tmp = s.var(doubled)?;
                    Ok(())
                })?;
                s.add_assign(&mut n, 1)
            })?;
            s.assign(&mut out, &n)
        })
    });

    insta::assert_snapshot!(glsl, @r"
    #version 330

    layout(location = 0) out int steps;

    void main()
    {
        int v1 = 0;
        while (v1 < 10)
        {
            {
                int v2 = (v1 * 2);
            }
            v1 = (v1 + 1);
        }
        steps = v1;
    }
    ");
}

#[test]
fn member_assignment_declares_owner() {
    let glsl = glsl_of(|s| {
        let mut out = s.out_data(|s| s.output::<Float>("len"))?;
        s.main(|s| {
            let mut p = Value::<Float2>::unbound();
            let mut px = s.x(&mut p)?;
            s.assign(&mut px, 3.0f32)?;
            let mut py = s.y(&mut p)?;
            s.assign(&mut py, 4.0f32)?;
            let len = s.length(&p)?;
            s.assign(&mut out, len)
        })
    });

    insta::assert_snapshot!(glsl, @r"
    #version 330

    layout(location = 0) out float len;

    void main()
    {
        vec2 v1;
        v1.x = 3.0;
        v1.y = 4.0;
        len = length(v1);
    }
    ");
}

#[test]
fn sampling_at_fragment_index() {
    let glsl = glsl_of(|s| {
        let (img, lut) = s.const_data(|s| {
            let img = s.input::<Buffer2D<Float>>("img")?;
            let lut = s.input::<Buffer1D<Float3>>("lut")?;
            Ok((img, lut))
        })?;
        let mut out = s.out_data(|s| s.output::<Float3>("color"))?;
        s.main(|s| {
            let idx = s.index();
            let texel = s.sample2d_at(&img, idx)?;
            let scaled = s.mul(texel, 255.0f32)?;
            let slot = s.cast::<Int, _>(scaled)?;
            let color = s.sample1d(&lut, slot)?;
            s.assign(&mut out, color)
        })
    });

    insta::assert_snapshot!(glsl, @r"
    #version 330

    uniform sampler2DRect img;
    uniform samplerBuffer lut;

    layout(location = 0) out vec3 color;

    void main()
    {
        ivec2 v3 = ivec2(gl_FragCoord.xy);
        color = texelFetch(lut, int((texelFetch(img, ivec2(v3.x, v3.y)).x * 255.0))).xyz;
    }
    ");
}

#[test]
fn normalized_index_declares_dispatch_size() {
    let glsl = glsl_of(|s| {
        let seed = s.const_data(|s| s.input::<UInt>("seed"))?;
        let mut out = s.out_data(|s| s.output::<Float2>("uv"))?;
        s.main(|s| {
            let uv = s.normalized_index();
            let shift = s.shl(seed, 1u32)?;
            let _mixed = s.var(shift)?;
            s.assign(&mut out, uv)
        })
    });

    insta::assert_snapshot!(glsl, @r"
    #version 330

    uniform ivec2 dispatch_size;
    uniform uint seed;

    layout(location = 0) out vec2 uv;

    void main()
    {
        uint v2 = (seed << 1u);
        uv = (gl_FragCoord.xy / vec2(dispatch_size));
    }
    ");
}

#[test]
fn pending_value_used_twice_is_duplicated() {
    let glsl = glsl_of(|s| {
        let a = s.const_data(|s| s.input::<Float>("a"))?;
        let mut out = s.out_data(|s| s.output::<Float>("d"))?;
        s.main(|s| {
            let v = s.construct3::<Float3, _, _, _>(a, 1.0f32, 0.0f32)?;
            let n = s.normalize(v)?;
            let d = s.dot(&n, &n)?;
            s.assign(&mut out, d)
        })
    });

    insta::assert_snapshot!(glsl, @r"
    #version 330

    uniform float a;

    layout(location = 0) out float d;

    void main()
    {
        d = dot(normalize(vec3(a, 1.0, 0.0)), normalize(vec3(a, 1.0, 0.0)));
    }
    ");
}

#[test]
fn manifest_lists_bindings_in_order() {
    let source = traced(|s| {
        let (x, _w) = s.const_data(|s| {
            let x = s.input::<Buffer1D<Float>>("x")?;
            let w = s.input::<Float>("main")?;
            Ok((x, w))
        })?;
        let (mut out, mut err) = s.out_data(|s| {
            let out = s.output::<Float>("out")?;
            let err = s.output::<Float>("v7")?;
            Ok((out, err))
        })?;
        s.main(|s| {
            let v = s.sample1d(&x, 0)?;
            s.assign(&mut out, &v)?;
            s.assign(&mut err, v)
        })
    });
    let program = generate(&source).unwrap();

    let idents: Vec<_> = program.inputs().iter().map(|i| i.ident.as_str()).collect();
    assert_eq!(idents, ["x", "main_"]);
    assert_eq!(program.inputs()[1].slot, 1);
    assert_eq!(program.input("x").unwrap().ty, ValueType::buffer_1d(ValueType::FLOAT));

    let out = program.output("out").unwrap();
    assert_eq!(out.ident, "out_");
    assert_eq!(out.location, 0);
    assert_eq!(program.output("v7").unwrap().ident, "v7_");
    assert_eq!(program.output("v7").unwrap().location, 1);
    assert!(program.source().contains("layout(location = 1) out float v7_;"));
    assert!(program.source().contains("v7_ = texelFetch(x, 0).x;"));
}

#[test]
fn manifest_serializes_types_as_names() {
    let source = traced(|s| {
        s.const_data(|s| s.input::<Buffer2D<UInt>>("grid").map(drop))?;
        let mut out = s.out_data(|s| s.output::<Float>("out"))?;
        s.main(|s| s.assign(&mut out, 1.0f32))
    });
    let program = generate(&source).unwrap();

    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(json["inputs"][0]["type"], "buffer2d<uint>");
    assert_eq!(json["inputs"][0]["ident"], "grid");
    assert_eq!(json["outputs"][0]["type"], "float");
    assert_eq!(json["outputs"][0]["location"], 0);
    assert!(json["source"].as_str().unwrap().contains("usampler2DRect grid"));
}

#[test]
fn config_changes_version_and_indent() {
    let source = traced(|s| {
        let mut out = s.out_data(|s| s.output::<Int>("n"))?;
        s.main(|s| s.assign(&mut out, 1))
    });
    let config = Config::new().version(400).indent(2);
    let program = generate_with_config(&source, config).unwrap();

    insta::assert_snapshot!(program.source(), @r"
    #version 400

    layout(location = 0) out int n;

    void main()
    {
      n = 1;
    }
    ");
}

#[test]
fn variable_escaping_its_block_is_rejected() {
    let source = traced(|s| {
        let mut out = s.out_data(|s| s.output::<Float>("out"))?;
        s.main(|s| {
            let mut t = Value::<Float>::unbound();
            s.scope(|s| s.assign(&mut t, 1.0f32))?;
            s.assign(&mut out, &t)
        })
    });

    let err = generate(&source).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::UndeclaredSymbol { symbol, .. } if symbol == SymbolId::from_raw(1)
    ));
}

#[test]
fn mangled_identifiers_must_stay_unique() {
    let source = traced(|s| {
        s.const_data(|s| s.input::<Float>("out").map(drop))?;
        s.out_data(|s| s.output::<Float>("out_").map(drop))?;
        s.main(|_| Ok(()))
    });

    assert_eq!(
        generate(&source).unwrap_err(),
        GenerateError::DuplicateName {
            name: "out_".to_string()
        }
    );
}

#[test]
fn missing_main_is_rejected() {
    let source = traced(|s| s.out_data(|s| s.output::<Float>("x").map(drop)));
    assert_eq!(generate(&source).unwrap_err(), GenerateError::MissingMain);
}

/// Hand-built trees for shapes the tracer never produces. Expressions are
/// built bottom-up since attached expressions are sealed.
struct Tree {
    ast: Ast,
    root: NodeId,
    main: NodeId,
}

impl Tree {
    fn new() -> Self {
        let mut ast = Ast::new();
        let root = ast.alloc(Node::new(NodeKind::Program, ValueType::VOID));
        let main = ast.alloc(Node::new(NodeKind::Main, ValueType::VOID));
        ast.add_child(root, main).unwrap();
        Self { ast, root, main }
    }

    fn section(&mut self, kind: NodeKind) -> NodeId {
        let section = self.node(Node::new(kind, ValueType::VOID), &[]);
        self.push(self.root, section);
        section
    }

    fn node(&mut self, node: Node, children: &[NodeId]) -> NodeId {
        let id = self.ast.alloc(node);
        for &child in children {
            self.ast.add_child(id, child).unwrap();
        }
        id
    }

    fn push(&mut self, parent: NodeId, child: NodeId) {
        self.ast.add_child(parent, child).unwrap();
    }

    fn var(&mut self, raw: u32) -> NodeId {
        self.node(
            Node::symbol(NodeKind::Var, ValueType::FLOAT, SymbolId::from_raw(raw)),
            &[],
        )
    }

    fn literal(&mut self, value: LiteralValue) -> NodeId {
        self.node(Node::literal(value), &[])
    }

    fn assign(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        let assign = self.node(Node::new(NodeKind::Assignment, ValueType::FLOAT), &[lhs, rhs]);
        self.push(self.main, assign);
        assign
    }

    fn generate(self) -> Result<String, GenerateError> {
        let source = Source::new(self.ast, self.root, 8);
        generate(&source).map(|program| program.source().to_string())
    }
}

#[test]
fn assignment_to_input_is_rejected() {
    let mut tree = Tree::new();
    let consts = tree.section(NodeKind::ConstData);
    let a = SymbolId::from_raw(0);
    let decl = tree.node(
        Node::symbol(NodeKind::ConstVar, ValueType::FLOAT, a).named("a"),
        &[],
    );
    tree.push(consts, decl);
    let lhs = tree.var(0);
    let rhs = tree.literal(LiteralValue::Float(1.0));
    let assign = tree.assign(lhs, rhs);

    assert_eq!(
        tree.generate().unwrap_err(),
        GenerateError::AssignToInput {
            node: assign,
            symbol: a
        }
    );
}

#[test]
fn else_without_if_is_rejected() {
    let mut tree = Tree::new();
    let orphan = tree.node(Node::new(NodeKind::Else, ValueType::VOID), &[]);
    tree.push(tree.main, orphan);

    assert_eq!(
        tree.generate().unwrap_err(),
        GenerateError::DanglingElse {
            node: orphan,
            kind: NodeKind::Else
        }
    );
}

#[test]
fn unknown_builtin_is_rejected() {
    let mut tree = Tree::new();
    let lhs = tree.var(0);
    let id = tree.literal(LiteralValue::Int(99));
    let call = tree.node(Node::new(NodeKind::Function, ValueType::FLOAT), &[id]);
    tree.assign(lhs, call);

    assert_eq!(
        tree.generate().unwrap_err(),
        GenerateError::UnknownBuiltin { node: call, id: 99 }
    );
}

#[test]
fn builtin_arity_is_checked() {
    let mut tree = Tree::new();
    let lhs = tree.var(0);
    let id = tree.literal(LiteralValue::Int(Builtin::Pow.id()));
    let base = tree.literal(LiteralValue::Float(2.0));
    let call = tree.node(Node::new(NodeKind::Function, ValueType::FLOAT), &[id, base]);
    tree.assign(lhs, call);

    assert_eq!(
        tree.generate().unwrap_err(),
        GenerateError::BuiltinArity {
            node: call,
            builtin: Builtin::Pow,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn bool_output_is_rejected() {
    let mut tree = Tree::new();
    let outs = tree.section(NodeKind::OutData);
    let flag = tree.node(
        Node::symbol(NodeKind::OutVar, ValueType::BOOL, SymbolId::from_raw(0)).named("flag"),
        &[],
    );
    tree.push(outs, flag);

    assert_eq!(
        tree.generate().unwrap_err(),
        GenerateError::InvalidOutputType {
            name: "flag".to_string(),
            ty: ValueType::BOOL
        }
    );
}

#[test]
fn expression_statement_is_rejected() {
    let mut tree = Tree::new();
    let stray = tree.literal(LiteralValue::Int(1));
    tree.push(tree.main, stray);

    assert_eq!(
        tree.generate().unwrap_err(),
        GenerateError::UnexpectedNode {
            node: stray,
            kind: NodeKind::Literal,
            context: "statement"
        }
    );
}

#[test]
fn second_main_is_rejected() {
    let mut tree = Tree::new();
    let extra = tree.section(NodeKind::Main);

    assert_eq!(
        tree.generate().unwrap_err(),
        GenerateError::DuplicateSection {
            node: extra,
            kind: NodeKind::Main
        }
    );
}

#[test]
fn deep_expression_chain() {
    const DEPTH: usize = 10_000;
    let glsl = glsl_of(|s| left_deep_sum(s, DEPTH));

    let expected = format!(
        "    total = {}a{};",
        "(".repeat(DEPTH),
        " + 1.0)".repeat(DEPTH)
    );
    assert!(glsl.lines().any(|line| line == expected));
    assert!(glsl.ends_with("}\n"));
}

#[test]
fn generation_is_repeatable() {
    let source = traced(|s| left_deep_sum(s, 4));

    let first = generate(&source).unwrap();
    let second = generate(&source).unwrap();

    assert_eq!(first.source(), second.source());
    assert_eq!(first, second);
}
