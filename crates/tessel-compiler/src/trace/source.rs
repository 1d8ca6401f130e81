use crate::ast::{Ast, AstPrinter, NodeId};

/// A finished trace: the arena and its program root.
#[derive(Clone, Debug)]
pub struct Source {
    ast: Ast,
    root: NodeId,
    symbols: u32,
}

impl Source {
    pub(crate) fn new(ast: Ast, root: NodeId, symbols: u32) -> Self {
        Self { ast, root, symbols }
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of symbols allocated while tracing.
    pub fn symbol_count(&self) -> u32 {
        self.symbols
    }

    pub fn printer(&self) -> AstPrinter<'_> {
        AstPrinter::new(&self.ast, self.root)
    }

    /// Indented tree with types.
    pub fn dump(&self) -> String {
        self.printer().with_types(true).dump()
    }
}
