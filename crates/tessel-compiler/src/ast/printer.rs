use std::fmt::Write;

use tessel_core::{Builtin, Role, Style};

use super::{Ast, NodeId, NodeKind, Payload};

/// Renders a traced tree as indented text or as a Graphviz digraph.
pub struct AstPrinter<'a> {
    ast: &'a Ast,
    root: NodeId,
    types: bool,
    style: Style,
}

impl<'a> AstPrinter<'a> {
    pub fn new(ast: &'a Ast, root: NodeId) -> Self {
        Self {
            ast,
            root,
            types: false,
            style: Style::PLAIN,
        }
    }

    pub fn with_types(mut self, value: bool) -> Self {
        self.types = value;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.style = Style::new(enabled);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn dump_dot(&self) -> String {
        let mut out = String::new();
        self.format_dot(&mut out).expect("String write never fails");
        out
    }

    /// Indented dump, one node per line.
    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, indent)) = stack.pop() {
            write!(w, "{}", "  ".repeat(indent))?;
            self.format_label(id, self.style, w)?;
            writeln!(w)?;
            stack.extend(
                self.ast
                    .children(id)
                    .iter()
                    .rev()
                    .map(|&child| (child, indent + 1)),
            );
        }
        Ok(())
    }

    fn format_label(&self, id: NodeId, style: Style, w: &mut impl Write) -> std::fmt::Result {
        let node = self.ast.get(id);
        write!(w, "{}", style.paint(Role::Kind, node.kind()))?;

        if self.types && !node.ty().is_void() {
            write!(w, " {}", style.paint(Role::Type, node.ty()))?;
        }

        match node.payload() {
            Payload::None => {}
            Payload::Symbol(symbol) => write!(w, " {}", style.paint(Role::Symbol, symbol))?,
            Payload::Literal(value) => write!(w, " {}", style.paint(Role::Literal, value))?,
            Payload::Member { owner, lane, .. } => write!(
                w,
                " {}.{}",
                style.paint(Role::Symbol, owner),
                lane.accessor()
            )?,
        }

        if node.kind() == NodeKind::Function
            && let Some(builtin) = self.builtin_of(id)
        {
            write!(w, " {}", style.paint(Role::Literal, builtin))?;
        }

        if let Some(name) = node.name() {
            write!(w, " {}", style.paint(Role::Name, format_args!("\"{name}\"")))?;
        }
        Ok(())
    }

    fn builtin_of(&self, id: NodeId) -> Option<Builtin> {
        let first = *self.ast.children(id).first()?;
        match self.ast.get(first).literal_value()? {
            super::LiteralValue::Int(raw) => Builtin::from_id(raw),
            _ => None,
        }
    }

    fn format_dot(&self, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "digraph ast {{")?;
        for id in self.ast.preorder(self.root) {
            let mut label = String::new();
            self.format_label(id, Style::PLAIN, &mut label)?;
            writeln!(
                w,
                "  n{} [label=\"{}\"];",
                id.as_u32(),
                label.replace('\\', "\\\\").replace('"', "\\\"")
            )?;
            for child in self.ast.children(id) {
                writeln!(w, "  n{} -> n{};", id.as_u32(), child.as_u32())?;
            }
        }
        writeln!(w, "}}")
    }
}
