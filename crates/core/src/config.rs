use crate::error::SidebarError;
use serde::{Deserialize, Serialize};

/// Session storage key holding the sidebar's scroll offset between pages.
pub const DEFAULT_STORAGE_KEY: &str = "sidebar-scroll";

/// Per-page settings injected by the site generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidebarConfig {
    /// Relative path from the current page back to the site root, e.g. `"../"`.
    ///
    /// Prefixed to every relative link. Empty when the page lives at the root.
    pub path_to_root: String,
    /// Key of the scroll-offset slot in session storage.
    ///
    /// Defaults to `"sidebar-scroll"`.
    pub storage_key: String,
    /// Render a toggle affordance on every entry that has children.
    pub toggles: bool,
    /// Center the active entry when no saved offset exists.
    ///
    /// Defaults to `true`.
    pub center_active: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            path_to_root: String::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toggles: false,
            center_active: true,
        }
    }
}

impl SidebarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SidebarError> {
        let config: SidebarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SidebarError> {
        if self.storage_key.trim().is_empty() {
            return Err(SidebarError::Config(
                "storageKey must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_path_to_root(mut self, path_to_root: impl Into<String>) -> Self {
        self.path_to_root = path_to_root.into();
        self
    }

    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn with_toggles(mut self, toggles: bool) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn with_center_active(mut self, center_active: bool) -> Self {
        self.center_active = center_active;
        self
    }

    /// Whether the current page sits at the site root.
    pub fn serves_from_root(&self) -> bool {
        self.path_to_root.is_empty()
    }
}
