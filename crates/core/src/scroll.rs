//! Scroll offset persistence across page navigations.
//!
//! The offset lives in a single session slot. It is written when a sidebar
//! link is clicked and read (then removed) by the next page once the tree is
//! mounted and the active entry is resolved.

use crate::error::SidebarError;
use log::{debug, warn};
use tocbar_traits::{ScrollStore, SidebarView};
use tocbar_types::NodePath;

/// What the restore step did to the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// A saved offset was applied.
    Restored(i32),
    /// No offset was saved; the active entry was centered.
    Centered(NodePath),
    /// The viewport was left at its default position.
    Unchanged,
}

/// Read-once access to the scroll slot under one key.
#[derive(Debug, Clone)]
pub struct ScrollPersistence<'a> {
    key: &'a str,
}

impl<'a> ScrollPersistence<'a> {
    pub fn new(key: &'a str) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &str {
        self.key
    }

    /// Read the saved offset and clear the slot.
    ///
    /// The slot is cleared even when the stored value is unusable.
    pub fn try_take<S: ScrollStore + ?Sized>(&self, store: &S) -> Result<Option<i32>, SidebarError> {
        let raw = store.get(self.key);
        let cleared = store.clear(self.key);
        let raw = raw?;
        cleared?;

        let Some(raw) = raw else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        // Browsers may report fractional offsets on scaled displays.
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|offset| offset.is_finite())
            .map(|offset| Some(offset.round() as i32))
            .ok_or_else(|| SidebarError::InvalidScrollOffset {
                key: self.key.to_string(),
                value: raw.clone(),
            })
    }

    /// Like [`try_take`](Self::try_take), logging and discarding failures.
    pub fn take<S: ScrollStore + ?Sized>(&self, store: &S) -> Option<i32> {
        match self.try_take(store) {
            Ok(offset) => offset,
            Err(e) => {
                warn!("Ignoring saved sidebar scroll position ({}): {e}", store.name());
                None
            }
        }
    }

    /// Save `offset`, overwriting any earlier value. Failures are logged only.
    pub fn save<S: ScrollStore + ?Sized>(&self, store: &S, offset: i32) {
        if let Err(e) = store.set(self.key, &offset.to_string()) {
            warn!("Could not save sidebar scroll position ({}): {e}", store.name());
        }
    }

    /// Apply the saved offset, or center `active` when nothing was saved.
    pub fn restore<S, V>(
        &self,
        store: &S,
        view: &mut V,
        active: Option<&NodePath>,
        center_active: bool,
    ) -> ScrollOutcome
    where
        S: ScrollStore + ?Sized,
        V: SidebarView + ?Sized,
    {
        if let Some(offset) = self.take(store) {
            debug!("Restoring sidebar scroll position {offset}");
            view.set_scroll_top(offset);
            return ScrollOutcome::Restored(offset);
        }
        match active {
            Some(path) if center_active => {
                debug!("Centering active entry {path}");
                view.center_on(path);
                ScrollOutcome::Centered(path.clone())
            }
            _ => ScrollOutcome::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tocbar_traits::{InMemoryScrollStore, StoreError};

    #[test]
    fn test_take_is_read_once() {
        let store = InMemoryScrollStore::new();
        let scroll = ScrollPersistence::new("sidebar-scroll");
        scroll.save(&store, 240);
        assert_eq!(scroll.take(&store), Some(240));
        assert_eq!(scroll.take(&store), None);
    }

    #[test]
    fn test_take_zero_is_present() {
        let store = InMemoryScrollStore::new();
        let scroll = ScrollPersistence::new("k");
        scroll.save(&store, 0);
        assert_eq!(scroll.take(&store), Some(0));
    }

    #[test]
    fn test_take_rounds_fractional_offsets() {
        let store = InMemoryScrollStore::new();
        store.set("k", "120.6").unwrap();
        assert_eq!(ScrollPersistence::new("k").take(&store), Some(121));
    }

    #[test]
    fn test_take_clears_garbage() {
        let store = InMemoryScrollStore::new();
        store.set("k", "not-a-number").unwrap();
        let scroll = ScrollPersistence::new("k");
        assert!(matches!(scroll.try_take(&store), Err(SidebarError::InvalidScrollOffset { .. })));
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_take_empty_string_is_absent() {
        let store = InMemoryScrollStore::new();
        store.set("k", "").unwrap();
        assert_eq!(ScrollPersistence::new("k").try_take(&store).unwrap(), None);
    }

    #[derive(Debug)]
    struct DisabledStore;

    impl ScrollStore for DisabledStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn clear(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn name(&self) -> &'static str {
            "DisabledStore"
        }
    }

    #[test]
    fn test_unavailable_store_degrades() {
        let scroll = ScrollPersistence::new("k");
        assert!(matches!(
            scroll.try_take(&DisabledStore),
            Err(SidebarError::Store(StoreError::Unavailable(_)))
        ));
        assert_eq!(scroll.take(&DisabledStore), None);
        // Must not panic
        scroll.save(&DisabledStore, 10);
    }
}
