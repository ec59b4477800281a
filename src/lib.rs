//! # tocbar
//!
//! Table-of-contents sidebar for statically generated documentation sites.
//!
//! The sidebar logic lives in [`tocbar_core`] and is re-exported here. The
//! [`cli`] module backs the `tocbar` binary, which lets the site generator
//! render the sidebar markup and check which entry a URL activates without a
//! browser.

pub mod cli;

pub use tocbar_core::*;
