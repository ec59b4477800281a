//! Error types for sidebar construction and interaction.
//!
//! Attaching a sidebar never fails: every degraded case is logged and
//! skipped. These errors come from parsing inputs and from addressing nodes.

use thiserror::Error;
use tocbar_traits::StoreError;
use tocbar_types::ParsePathError;

#[derive(Error, Debug)]
pub enum SidebarError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
    #[error("No table-of-contents entry at path '{0}'")]
    InvalidPath(String),
    #[error("Malformed node path: {0}")]
    ParsePath(#[from] ParsePathError),
    #[error("Stored scroll offset '{value}' under '{key}' is not a number")]
    InvalidScrollOffset { key: String, value: String },
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
