//! # tocbar-core
//!
//! Platform-agnostic logic for the table-of-contents sidebar of a statically
//! generated documentation site.
//!
//! Attaching a sidebar runs four steps, once, in this order:
//! - **mount**: render the build-time tree as nested list markup
//! - **resolve**: find the entry for the current page, mark it active and
//!   expand its ancestors
//! - **scroll**: restore the offset saved by the previous page, or center the
//!   active entry
//! - **toggle**: expand/collapse affordances, driven by click events afterwards
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. Session storage and the host
//! element are reached through the [`ScrollStore`] and [`SidebarView`] traits,
//! which the wasm bindings implement on top of the browser.

// Re-export foundation crates
pub use tocbar_traits as traits;
pub use tocbar_types as types;

pub mod config;
pub mod error;
pub mod location;
pub mod mount;
pub mod resolve;
pub mod scroll;
pub mod sidebar;
pub mod toggle;

pub use config::{DEFAULT_STORAGE_KEY, SidebarConfig};
pub use error::SidebarError;
pub use location::{PageLocation, canonicalize};
pub use resolve::{ActivePath, MatchKind};
pub use scroll::{ScrollOutcome, ScrollPersistence};
pub use sidebar::{Sidebar, initialize};

pub use traits::{InMemoryScrollStore, ScrollStore, SidebarView, StoreError};
pub use types::{NodeKind, NodePath, TocNode, TocTree};
