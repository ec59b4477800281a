//! WebAssembly bindings for the tocbar sidebar.
//!
//! The site generator emits a small script defining the sidebar's custom
//! element. Its `connectedCallback` hands the element to [`initialize`],
//! which mounts the table of contents, highlights the current page, restores
//! the scroll position and wires the click handlers.
//!
//! # Example
//!
//! ```javascript
//! import init, { initialize } from './tocbar_wasm.js';
//!
//! await init();
//!
//! class SidebarScrollbox extends HTMLElement {
//!   connectedCallback() {
//!     initialize(this, TOC_JSON, { pathToRoot: path_to_root, toggles: true });
//!   }
//! }
//! customElements.define('mdbook-sidebar-scrollbox', SidebarScrollbox);
//! ```
//!
//! ## Module Structure
//!
//! - [`element`] - attachment of a sidebar to a host element and its listeners
//! - [`dom`] - `SidebarView` over the host element
//! - [`storage`] - `ScrollStore` over `sessionStorage`
//! - [`error`] - Error types with JavaScript interop

mod dom;
mod element;
mod error;
mod storage;

pub use dom::DomView;
pub use element::{initialize, initialize_at};
pub use error::{ErrorCode, SidebarJsError};
pub use storage::SessionStorageStore;

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the tocbar-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
