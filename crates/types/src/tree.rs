use crate::node::TocNode;
use crate::path::NodePath;
use serde::{Deserialize, Serialize};

/// The implicit root of the table of contents: the ordered top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TocTree {
    nodes: Vec<TocNode>,
}

impl TocTree {
    pub fn new(nodes: Vec<TocNode>) -> Self {
        Self { nodes }
    }

    /// Parses the build-time serialized form, a JSON array of nodes.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn nodes(&self) -> &[TocNode] {
        &self.nodes
    }

    pub fn get(&self, path: &NodePath) -> Option<&TocNode> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.nodes.get(*first)?;
        for index in rest {
            node = node.children.get(*index)?;
        }
        Some(node)
    }

    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut TocNode> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.nodes.get_mut(*first)?;
        for index in rest {
            node = node.children.get_mut(*index)?;
        }
        Some(node)
    }

    /// Walks every node in document order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(&self.nodes)
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sets the initial expansion of every node from its [`NodePath::depth`]:
    /// nodes at depth `level` or shallower start expanded, deeper ones start
    /// collapsed. `fold(0)` collapses everything, `fold(1)` opens the
    /// top-level entries only.
    pub fn fold(&mut self, level: usize) {
        fn walk(nodes: &mut [TocNode], depth: usize, level: usize) {
            for node in nodes {
                node.expanded = depth <= level;
                walk(&mut node.children, depth + 1, level);
            }
        }
        walk(&mut self.nodes, 1, level);
    }

    pub fn expand_all(&mut self) {
        self.fold(usize::MAX);
    }

    pub fn clear_active(&mut self) {
        fn walk(nodes: &mut [TocNode]) {
            for node in nodes {
                node.active = false;
                walk(&mut node.children);
            }
        }
        walk(&mut self.nodes);
    }
}

impl From<Vec<TocNode>> for TocTree {
    fn from(nodes: Vec<TocNode>) -> Self {
        Self::new(nodes)
    }
}

/// Pre-order iterator over `(path, node)` pairs.
pub struct PreOrder<'a> {
    stack: Vec<(NodePath, &'a TocNode)>,
}

impl<'a> PreOrder<'a> {
    fn new(roots: &'a [TocNode]) -> Self {
        let stack = roots
            .iter()
            .enumerate()
            .rev()
            .map(|(index, node)| (NodePath::top_level(index), node))
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (NodePath, &'a TocNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        for (index, child) in node.children.iter().enumerate().rev() {
            self.stack.push((path.child(index), child));
        }
        Some((path, node))
    }
}
