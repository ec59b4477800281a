//! SidebarView trait for the surface the sidebar is attached to.
//!
//! In a browser this is the custom element hosting the table of contents.
//! Tests and offline tools provide recording implementations.

use tocbar_types::NodePath;

/// The host surface of the sidebar.
///
/// Nodes are addressed by [`NodePath`]; the mounted markup tags every entry
/// with its path so implementations can find the matching element.
pub trait SidebarView {
    /// Replace the surface's content with the rendered table of contents.
    fn mount(&mut self, markup: &str);

    /// Highlight the entry at `path` as the current page.
    fn mark_active(&mut self, path: &NodePath);

    /// Show or hide the children of the entry at `path`.
    fn set_expanded(&mut self, path: &NodePath, expanded: bool);

    /// Current vertical scroll offset in pixels.
    fn scroll_top(&self) -> i32;

    fn set_scroll_top(&mut self, offset: i32);

    /// Scroll so the entry at `path` sits in the vertical center of the visible region.
    fn center_on(&mut self, path: &NodePath);
}
