use crate::config::SidebarConfig;
use crate::error::SidebarError;
use crate::location::PageLocation;
use crate::mount;
use crate::resolve::{self, ActivePath};
use crate::scroll::{ScrollOutcome, ScrollPersistence};
use crate::toggle;
use log::debug;
use tocbar_traits::{ScrollStore, SidebarView};
use tocbar_types::{NodePath, TocTree};

/// A table-of-contents sidebar attached to one page.
///
/// Owns its own copy of the tree, so attaching again with the same inputs
/// starts from the build-time flags and reproduces the same state.
#[derive(Debug, Clone)]
pub struct Sidebar {
    config: SidebarConfig,
    tree: TocTree,
    location: PageLocation,
    active: Option<ActivePath>,
    scroll: ScrollOutcome,
}

impl Sidebar {
    /// Mount, resolve the active entry, then restore the scroll position.
    pub fn attach<S, V>(
        config: SidebarConfig,
        tree: &TocTree,
        current_url: &str,
        store: &S,
        view: &mut V,
    ) -> Self
    where
        S: ScrollStore + ?Sized,
        V: SidebarView + ?Sized,
    {
        let mut tree = tree.clone();
        tree.clear_active();

        let markup = mount::render(&tree, &config);
        view.mount(&markup);
        debug!("Mounted {} table-of-contents entries", tree.len());

        let location = PageLocation::parse(current_url);
        let active = resolve::find_active(&tree, &location, &config);
        match &active {
            Some(found) => {
                let expanded = resolve::apply(&mut tree, &found.path);
                view.mark_active(&found.path);
                for path in &expanded {
                    view.set_expanded(path, true);
                }
                debug!(
                    "Active entry {} ({:?}), expanded {} ancestors",
                    found.path,
                    found.matched_by,
                    expanded.len()
                );
            }
            None => debug!("No entry matches {}", location.canonical()),
        }

        let scroll = ScrollPersistence::new(&config.storage_key).restore(
            store,
            view,
            active.as_ref().map(|found| &found.path),
            config.center_active,
        );

        Self {
            config,
            tree,
            location,
            active,
            scroll,
        }
    }

    /// Save the current scroll offset before a sidebar link navigates away.
    pub fn on_link_click<S, V>(&self, store: &S, view: &V)
    where
        S: ScrollStore + ?Sized,
        V: SidebarView + ?Sized,
    {
        ScrollPersistence::new(&self.config.storage_key).save(store, view.scroll_top());
    }

    /// Flip the entry at `path` between expanded and collapsed.
    pub fn toggle<V>(&mut self, path: &NodePath, view: &mut V) -> Result<bool, SidebarError>
    where
        V: SidebarView + ?Sized,
    {
        let expanded = toggle::toggle(&mut self.tree, path)?;
        view.set_expanded(path, expanded);
        Ok(expanded)
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub fn tree(&self) -> &TocTree {
        &self.tree
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    pub fn active(&self) -> Option<&ActivePath> {
        self.active.as_ref()
    }

    pub fn active_path(&self) -> Option<&NodePath> {
        self.active.as_ref().map(|found| &found.path)
    }

    /// What the initial scroll restoration did.
    pub fn scroll_outcome(&self) -> &ScrollOutcome {
        &self.scroll
    }
}

/// Attach the sidebar described by `config` and `tree` to `view`.
pub fn initialize<S, V>(
    config: SidebarConfig,
    tree: &TocTree,
    current_url: &str,
    store: &S,
    view: &mut V,
) -> Sidebar
where
    S: ScrollStore + ?Sized,
    V: SidebarView + ?Sized,
{
    Sidebar::attach(config, tree, current_url, store, view)
}
