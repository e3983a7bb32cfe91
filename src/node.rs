//! Arena representation of a parsed dump.
//!
//! Every line that survives parsing becomes a [`Node`] stored in a flat arena owned by a
//! [`Forest`]. Nodes refer to each other by [`NodeId`] so the parent link never owns anything,
//! and the whole tree is dropped in one go with the forest.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Index of a node inside its forest's arena.
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
/// One line of dumped text placed in the hierarchy.
pub struct Node {
    /// Arena slot of this node.
    pub id: NodeId,
    /// Line content after any transform, without its leading indentation.
    pub text: String,
    /// Nesting level, 0 for roots.
    pub depth: usize,
    /// Leading whitespace width the line was recorded under.
    pub indent: usize,
    /// Containing node, if any.
    pub parent: Option<NodeId>,
    /// Directly nested nodes in order of appearance.
    pub children: Vec<NodeId>,
}

#[derive(Clone, Debug, Default)]
/// Ordered collection of root-level trees built from one dump.
///
/// The arena may hold nodes that are not reachable from [`Forest::roots`]: lines dropped by an
/// unexpected dedent still steer later parsing, so they are stored, but nothing that walks the
/// forest from its roots will ever see them.
pub struct Forest {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Forest {
    #[must_use]
    /// Empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Depth-0 nodes in input order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    #[must_use]
    /// Whether nothing is reachable, i.e. there are no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[must_use]
    /// Number of nodes in the arena, including unreachable ones.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    /// Number of nodes reachable from the roots.
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    #[must_use]
    /// Looks up a node by id, or `None` if `id` is past the end of the arena.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Looks up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this forest.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[must_use]
    /// Text of `id`. Panics on a foreign id, like [`Forest::node`].
    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    #[must_use]
    /// Children of `id` in input order. Panics on a foreign id, like [`Forest::node`].
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    #[must_use]
    /// Containing node of `id`, `None` for roots and dropped lines.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[must_use]
    /// Ids of the siblings of `id`, itself included, in order.
    pub fn siblings(&self, id: NodeId) -> &[NodeId] {
        match self.parent(id) {
            Some(parent) => self.children(parent),
            None => &self.roots,
        }
    }

    #[must_use]
    /// Chain of ids from the outermost ancestor down to `id`.
    ///
    /// Empty if `id` is not in the arena.
    pub fn ancestry(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.get(id);

        while let Some(node) = current {
            chain.push(node.id);
            current = node.parent.and_then(|parent| self.get(parent));
        }

        chain.reverse();
        chain
    }

    #[must_use]
    /// Depth-first walk over every reachable node, roots before their children.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder {
            forest: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    #[must_use]
    /// Pre-order walk restricted to the subtree under `id`.
    pub fn subtree(&self, id: NodeId) -> PreOrder<'_> {
        PreOrder {
            forest: self,
            stack: vec![id],
        }
    }

    pub(crate) fn alloc(
        &mut self,
        text: String,
        depth: usize,
        indent: usize,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            text,
            depth,
            indent,
            parent,
            children: Vec::new(),
        });
        id
    }

    pub(crate) fn attach(&mut self, id: NodeId) {
        match self.nodes[id.0].parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
    }
}

/// Iterator returned by [`Forest::pre_order`] and [`Forest::subtree`].
pub struct PreOrder<'a> {
    forest: &'a Forest,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.forest.node(id);
        self.stack.extend(node.children.iter().rev().copied());
        Some(node)
    }
}

#[cfg(test)]
#[path = "tests/node.rs"]
mod tests;
