//! Index arena holding every node of one trace.

use std::fmt;

use super::{Node, NodeKind};

/// Index of a node inside its [`Ast`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn as_u32(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural violations rejected by [`Ast::add_child`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    #[error("{kind} node {parent} already holds its maximum of {max} children")]
    ArityExceeded {
        parent: NodeId,
        kind: NodeKind,
        max: usize,
    },

    #[error("node {child} already belongs to {parent}")]
    AlreadyAttached { child: NodeId, parent: NodeId },

    #[error("{kind} node {parent} is sealed")]
    Sealed { parent: NodeId, kind: NodeKind },

    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}

/// Arena of nodes. Nodes are never removed; detached nodes that nothing
/// adopts stay unreachable from the root.
#[derive(Clone, Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Node by id.
    ///
    /// Panics if `id` came from another arena.
    pub fn get(&self, id: NodeId) -> &Node {
        self.nodes
            .get(id.index())
            .unwrap_or_else(|| panic!("Ast: node {id} not found (NodeIds must come from the same Ast)"))
    }

    pub fn try_get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).children()
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.get(id).kind()
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        self.get(id).parent.is_some()
    }

    /// Append `child` to `parent`.
    ///
    /// The child must be detached, the parent must have room for it, and a
    /// parent that is itself attached only accepts children if it is a block.
    pub(crate) fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), AstError> {
        let parent_node = self.get(parent);
        let kind = parent_node.kind;

        if let Some(max) = kind.arity().max
            && parent_node.children.len() >= max
        {
            return Err(AstError::ArityExceeded { parent, kind, max });
        }
        if parent_node.parent.is_some() && !kind.is_block() {
            return Err(AstError::Sealed { parent, kind });
        }
        if let Some(owner) = self.get(child).parent {
            return Err(AstError::AlreadyAttached {
                child,
                parent: owner,
            });
        }
        if self.ancestors(parent).any(|id| id == child) {
            return Err(AstError::Cycle { parent, child });
        }

        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// `id` followed by each of its ancestors up to the root.
    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |&cur| self.get(cur).parent)
    }

    /// Copy the subtree rooted at `id`; the copy is detached.
    pub(crate) fn deep_clone(&mut self, id: NodeId) -> NodeId {
        let root = self.copy_node(id, None);
        // (source node, copy of its parent)
        let mut stack: Vec<(NodeId, NodeId)> =
            self.children(id).iter().rev().map(|&child| (child, root)).collect();
        while let Some((source, parent)) = stack.pop() {
            let copy = self.copy_node(source, Some(parent));
            stack.extend(self.children(source).iter().rev().map(|&child| (child, copy)));
        }
        root
    }

    /// Childless copy of `source`, appended to `parent` when given.
    fn copy_node(&mut self, source: NodeId, parent: Option<NodeId>) -> NodeId {
        let node = self.get(source);
        let copy = Node {
            kind: node.kind,
            ty: node.ty,
            children: Vec::new(),
            payload: node.payload.clone(),
            name: node.name.clone(),
            parent,
        };
        let copy_id = self.alloc(copy);
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(copy_id);
        }
        copy_id
    }

    /// Depth-first pre-order walk of the subtree rooted at `root`.
    pub fn preorder(&self, root: NodeId) -> Preorder<'_> {
        Preorder {
            ast: self,
            stack: vec![root],
        }
    }
}

pub struct Preorder<'a> {
    ast: &'a Ast,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.ast.children(id).iter().rev().copied());
        Some(id)
    }
}
