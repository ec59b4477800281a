//! Addressing of nodes inside a [`TocTree`](crate::TocTree).
//!
//! A path is the ordered list of child indices walked from the implicit root.
//! The textual form joins the indices with dots (`"1.0.3"`) and is what the
//! mounted markup carries in its `data-toc-path` attributes.

use itertools::Itertools;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePathError {
    #[error("node path is empty")]
    Empty,
    #[error("invalid path segment '{segment}' in '{input}'")]
    InvalidSegment { input: String, segment: String },
}

/// The address of one node, as child indices from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The path of the `index`-th top-level node.
    pub fn top_level(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of edges from the implicit root; top-level nodes have depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_top_level(&self) -> bool {
        self.0.len() == 1
    }

    /// The path of this node's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// The enclosing node, or `None` for top-level nodes.
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() < 2 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Every strict ancestor, outermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = NodePath> + '_ {
        (1..self.0.len()).map(move |len| Self(self.0[..len].to_vec()))
    }

    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        !self.0.is_empty() && self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("."))
    }
}

impl FromStr for NodePath {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParsePathError::Empty);
        }
        trimmed
            .split('.')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| ParsePathError::InvalidSegment {
                        input: s.to_string(),
                        segment: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
