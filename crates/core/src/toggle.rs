//! Expand/collapse of a single entry.

use crate::error::SidebarError;
use tocbar_types::{NodePath, TocTree};

/// Flip the `expanded` flag of the entry at `path` and return its new value.
///
/// No other entry changes; descendants keep their own flags and are simply
/// hidden while an ancestor is collapsed.
pub fn toggle(tree: &mut TocTree, path: &NodePath) -> Result<bool, SidebarError> {
    let node = tree
        .get_mut(path)
        .ok_or_else(|| SidebarError::InvalidPath(path.to_string()))?;
    node.expanded = !node.expanded;
    Ok(node.expanded)
}
