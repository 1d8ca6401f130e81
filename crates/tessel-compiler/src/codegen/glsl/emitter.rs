//! Core emitter struct: sections, declarations and the entry point.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tessel_core::{Builtin, ValueType};

use super::naming::{self, DISPATCH_SIZE};
use super::{Config, GenerateError};
use crate::ast::{Ast, LiteralValue, NodeId, NodeKind, SymbolId};
use crate::program::{InputBinding, OutputBinding, Program};
use crate::trace::Source;

/// GLSL emitter over a finished trace.
pub struct Emitter<'a> {
    pub(super) ast: &'a Ast,
    pub(super) root: NodeId,
    pub(super) config: Config,

    /// Symbol -> identifier of every input and output
    pub(super) globals: HashMap<SymbolId, String>,
    /// Identifier -> symbol, in declaration order (collision detection)
    pub(super) idents: IndexMap<String, SymbolId>,
    /// Symbols of const inputs; never assignable
    pub(super) inputs: HashSet<SymbolId>,
    /// Declared symbols per open scope; the first holds inputs and outputs
    pub(super) scopes: Vec<HashSet<SymbolId>>,
    /// Current indentation level
    pub(super) depth: usize,
    /// Output buffer
    pub(super) output: String,
}

#[derive(Default)]
struct Sections {
    const_data: Option<NodeId>,
    out_data: Option<NodeId>,
    main: Option<NodeId>,
}

impl<'a> Emitter<'a> {
    pub fn new(source: &'a Source, config: Config) -> Self {
        Self {
            ast: source.ast(),
            root: source.root(),
            config,
            globals: HashMap::new(),
            idents: IndexMap::new(),
            inputs: HashSet::new(),
            scopes: vec![HashSet::new()],
            depth: 0,
            output: String::new(),
        }
    }

    /// Emit the fragment shader and its binding manifest.
    #[tracing::instrument(skip_all, name = "glsl")]
    pub fn emit(mut self) -> Result<Program, GenerateError> {
        let sections = self.sections()?;
        let main = sections.main.ok_or(GenerateError::MissingMain)?;
        let inputs = match sections.const_data {
            Some(block) => self.collect_inputs(block)?,
            None => Vec::new(),
        };
        let outputs = match sections.out_data {
            Some(block) => self.collect_outputs(block)?,
            None => Vec::new(),
        };

        self.output
            .push_str(&format!("#version {}\n", self.config.version));

        let mut uniforms = Vec::new();
        if self.uses_dispatch_size(main) {
            uniforms.push(format!("uniform ivec2 {DISPATCH_SIZE};"));
        }
        for input in &inputs {
            let ty = self.spell(main, input.ty)?;
            uniforms.push(format!("uniform {ty} {};", input.ident));
        }
        self.emit_group(&uniforms);

        let mut targets = Vec::new();
        for output in &outputs {
            let ty = self.spell(main, output.ty)?;
            targets.push(format!(
                "layout(location = {}) out {ty} {};",
                output.location, output.ident
            ));
        }
        self.emit_group(&targets);

        self.output.push_str("\nvoid main()\n");
        self.emit_body(main, 0)?;

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');

        tracing::debug!(
            inputs = inputs.len(),
            outputs = outputs.len(),
            bytes = self.output.len(),
            "generated shader"
        );
        Ok(Program::new(self.output, inputs, outputs))
    }

    /// Locate the sections under the root, rejecting anything else there.
    fn sections(&self) -> Result<Sections, GenerateError> {
        let kind = self.ast.kind(self.root);
        if kind != NodeKind::Program {
            return Err(GenerateError::NotAProgram {
                node: self.root,
                kind,
            });
        }

        let mut sections = Sections::default();
        for &id in self.ast.children(self.root) {
            let kind = self.ast.kind(id);
            let slot = match kind {
                NodeKind::ConstData => &mut sections.const_data,
                NodeKind::OutData => &mut sections.out_data,
                NodeKind::Main => &mut sections.main,
                _ => {
                    return Err(GenerateError::UnexpectedNode {
                        node: id,
                        kind,
                        context: "program section",
                    });
                }
            };
            if slot.replace(id).is_some() {
                return Err(GenerateError::DuplicateSection { node: id, kind });
            }
        }
        Ok(sections)
    }

    fn collect_inputs(&mut self, block: NodeId) -> Result<Vec<InputBinding>, GenerateError> {
        let ast = self.ast;
        let mut bindings = Vec::new();
        for (slot, &id) in ast.children(block).iter().enumerate() {
            let (symbol, name, ty) = self.declaration(id, NodeKind::ConstVar, "input declaration")?;
            if naming::type_name(ty).is_none() || ty.is_void() {
                return Err(GenerateError::InvalidInputType {
                    name: name.to_string(),
                    ty,
                });
            }
            let ident = self.register(symbol, name)?;
            self.inputs.insert(symbol);
            bindings.push(InputBinding {
                name: name.to_string(),
                ident,
                ty,
                slot: slot as u32,
            });
        }
        Ok(bindings)
    }

    fn collect_outputs(&mut self, block: NodeId) -> Result<Vec<OutputBinding>, GenerateError> {
        let ast = self.ast;
        let mut bindings = Vec::new();
        for (location, &id) in ast.children(block).iter().enumerate() {
            let (symbol, name, ty) = self.declaration(id, NodeKind::OutVar, "output declaration")?;
            if naming::type_name(ty).is_none() || ty.is_buffer() || ty == ValueType::BOOL {
                return Err(GenerateError::InvalidOutputType {
                    name: name.to_string(),
                    ty,
                });
            }
            let ident = self.register(symbol, name)?;
            bindings.push(OutputBinding {
                name: name.to_string(),
                ident,
                ty,
                location: location as u32,
            });
        }
        Ok(bindings)
    }

    fn declaration(
        &self,
        id: NodeId,
        expected: NodeKind,
        context: &'static str,
    ) -> Result<(SymbolId, &'a str, ValueType), GenerateError> {
        let ast = self.ast;
        let node = ast.get(id);
        if node.kind() != expected {
            return Err(GenerateError::UnexpectedNode {
                node: id,
                kind: node.kind(),
                context,
            });
        }
        let symbol = self.symbol_of(id)?;
        let name = node.name().ok_or(GenerateError::MissingName { node: id })?;
        Ok((symbol, name, node.ty()))
    }

    /// Record a global and return its identifier.
    fn register(&mut self, symbol: SymbolId, name: &str) -> Result<String, GenerateError> {
        let ident = naming::ident_for(name);
        if self.idents.contains_key(&ident) || self.globals.contains_key(&symbol) {
            return Err(GenerateError::DuplicateName { name: ident });
        }
        self.idents.insert(ident.clone(), symbol);
        self.globals.insert(symbol, ident.clone());
        self.scopes[0].insert(symbol);
        Ok(ident)
    }

    fn emit_group(&mut self, lines: &[String]) {
        if lines.is_empty() {
            return;
        }
        self.output.push('\n');
        for line in lines {
            self.output.push_str(line);
            self.output.push('\n');
        }
    }

    fn uses_dispatch_size(&self, main: NodeId) -> bool {
        self.ast.preorder(main).any(|id| {
            let node = self.ast.get(id);
            match node.kind() {
                NodeKind::NormalizedIndex => true,
                NodeKind::Function => node
                    .children()
                    .first()
                    .and_then(|&first| self.ast.get(first).literal_value())
                    .is_some_and(|value| {
                        value == LiteralValue::Int(Builtin::NormalizedIndex.id())
                    }),
                _ => false,
            }
        })
    }

    /// Write one line at the current indentation.
    pub(super) fn line(&mut self, text: &str) {
        let width = self.config.indent * self.depth;
        self.output.extend(std::iter::repeat_n(' ', width));
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub(super) fn spell(&self, node: NodeId, ty: ValueType) -> Result<&'static str, GenerateError> {
        naming::type_name(ty).ok_or(GenerateError::UnsupportedType { node, ty })
    }

    pub(super) fn symbol_of(&self, id: NodeId) -> Result<SymbolId, GenerateError> {
        let node = self.ast.get(id);
        node.symbol_id().ok_or(GenerateError::UnexpectedNode {
            node: id,
            kind: node.kind(),
            context: "symbol reference",
        })
    }

    /// Identifier for `symbol`, which must be visible in an open scope.
    pub(super) fn name_of(&self, node: NodeId, symbol: SymbolId) -> Result<String, GenerateError> {
        if !self.is_declared(symbol) {
            return Err(GenerateError::UndeclaredSymbol { node, symbol });
        }
        Ok(self.ident_of(symbol))
    }

    pub(super) fn ident_of(&self, symbol: SymbolId) -> String {
        self.globals
            .get(&symbol)
            .cloned()
            .unwrap_or_else(|| naming::local_name(symbol))
    }

    pub(super) fn is_declared(&self, symbol: SymbolId) -> bool {
        self.scopes.iter().any(|scope| scope.contains(&symbol))
    }

    pub(super) fn declare(&mut self, symbol: SymbolId) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(symbol);
        }
    }

    /// Children of `id`, which must number exactly `N`.
    pub(super) fn children_exact<const N: usize>(
        &self,
        id: NodeId,
    ) -> Result<[NodeId; N], GenerateError> {
        let children = self.ast.children(id);
        <[NodeId; N]>::try_from(children).map_err(|_| GenerateError::MalformedNode {
            node: id,
            kind: self.ast.kind(id),
            found: children.len(),
        })
    }
}
