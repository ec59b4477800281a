//! Matching the current page against the tree.

use crate::config::SidebarConfig;
use crate::location::{PageLocation, rewrite_href};
use log::{debug, trace};
use tocbar_types::{NodePath, TocTree};

/// How the active entry was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The entry's resolved link equals the canonical page URL.
    Exact,
    /// The site root index aliases the first chapter.
    RootAlias,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePath {
    pub path: NodePath,
    pub matched_by: MatchKind,
}

/// Find the entry for the current page.
///
/// The first entry in document order whose resolved link equals the
/// canonical page URL wins. When nothing matches, a page served from the site
/// root whose URL ends in `/index.html` activates the first top-level chapter,
/// since the generator copies the first chapter to `index.html`.
pub fn find_active(
    tree: &TocTree,
    location: &PageLocation,
    config: &SidebarConfig,
) -> Option<ActivePath> {
    let current = location.canonical();

    let exact = tree.iter().find_map(|(path, node)| {
        let href = node.navigable_href()?;
        let resolved = location.resolve_link(&rewrite_href(&config.path_to_root, href));
        trace!("comparing {path} ({resolved}) with {current}");
        (resolved == current).then_some(path)
    });
    if let Some(path) = exact {
        return Some(ActivePath {
            path,
            matched_by: MatchKind::Exact,
        });
    }

    if config.serves_from_root() && location.is_index_page() {
        let first = tree
            .nodes()
            .iter()
            .position(|node| node.navigable_href().is_some())?;
        debug!("{current} aliases the first chapter");
        return Some(ActivePath {
            path: NodePath::top_level(first),
            matched_by: MatchKind::RootAlias,
        });
    }

    None
}

/// Mark `active` as the only active entry and expand its ancestors.
///
/// Returns the ancestors that were expanded, outermost first. Returns an empty
/// list and leaves the tree untouched when `active` does not exist.
pub fn apply(tree: &mut TocTree, active: &NodePath) -> Vec<NodePath> {
    if tree.get(active).is_none() {
        return Vec::new();
    }
    tree.clear_active();
    if let Some(node) = tree.get_mut(active) {
        node.active = true;
    }

    let ancestors: Vec<NodePath> = active.ancestors().collect();
    for ancestor in &ancestors {
        if let Some(node) = tree.get_mut(ancestor) {
            node.expanded = true;
        }
    }
    ancestors
}
