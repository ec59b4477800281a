//! Attaching a sidebar to its host element.

use crate::dom::DomView;
use crate::error::SidebarJsError;
use crate::storage::SessionStorageStore;
use std::cell::RefCell;
use std::rc::Rc;
use tocbar_core::{NodePath, Sidebar, SidebarConfig, SidebarError, TocTree};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, Event};

/// State shared by the click listeners of one attached sidebar.
struct Attachment {
    sidebar: Sidebar,
    view: DomView,
    store: SessionStorageStore,
}

/// Attach the sidebar to `host` for the page currently displayed.
///
/// # Arguments
///
/// * `host` - The custom element receiving the table of contents
/// * `toc_json` - The build-time tree, a JSON array of entries
/// * `config` - Optional `{ pathToRoot, storageKey, toggles, centerActive }`.
///   When omitted, `pathToRoot` is taken from the page's global `path_to_root`.
#[wasm_bindgen]
pub fn initialize(host: &Element, toc_json: &str, config: JsValue) -> Result<(), JsValue> {
    let window =
        web_sys::window().ok_or_else(|| SidebarJsError::dom("No window object available"))?;
    let current_url = window
        .location()
        .href()
        .map_err(|e| SidebarJsError::dom(format!("Cannot read document location: {e:?}")))?;
    initialize_at(host, toc_json, config, &current_url)
}

/// Like [`initialize`], for an explicit page URL.
#[wasm_bindgen(js_name = initializeAt)]
pub fn initialize_at(
    host: &Element,
    toc_json: &str,
    config: JsValue,
    current_url: &str,
) -> Result<(), JsValue> {
    let config = read_config(config)?;
    let tree = TocTree::from_json(toc_json).map_err(SidebarJsError::from)?;

    let store = SessionStorageStore::new();
    let mut view = DomView::new(host.clone());
    let sidebar = Sidebar::attach(config, &tree, current_url, &store, &mut view);

    let attachment = Rc::new(RefCell::new(Attachment {
        sidebar,
        view,
        store,
    }));
    bind_link_clicks(host, &attachment)?;
    bind_toggles(host, &attachment)?;
    Ok(())
}

fn read_config(value: JsValue) -> Result<SidebarConfig, SidebarJsError> {
    let config = if value.is_undefined() || value.is_null() {
        let mut config = SidebarConfig::default();
        if let Some(path_to_root) = global_path_to_root() {
            config.path_to_root = path_to_root;
        }
        config
    } else {
        serde_wasm_bindgen::from_value::<SidebarConfig>(value)?
    };
    config.validate()?;
    Ok(config)
}

/// The `path_to_root` variable the generator defines on every page.
fn global_path_to_root() -> Option<String> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("path_to_root"))
        .ok()
        .and_then(|value| value.as_string())
}

/// Selector for navigable links; toggles are anchors without an href.
const LINK_SELECTOR: &str = "a[href]";

/// Save the scroll offset whenever a link inside the sidebar is clicked,
/// including clicks on the section number inside a link.
fn bind_link_clicks(
    host: &Element,
    attachment: &Rc<RefCell<Attachment>>,
) -> Result<(), SidebarJsError> {
    let state = Rc::clone(attachment);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let on_link = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest(LINK_SELECTOR).ok().flatten())
            .is_some();
        if on_link {
            let state = state.borrow();
            state.sidebar.on_link_click(&state.store, &state.view);
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    host.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        on_click.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| SidebarJsError::dom(format!("Cannot listen for link clicks: {e:?}")))?;
    // Listeners stay registered until the page unloads.
    on_click.forget();
    Ok(())
}

fn bind_toggles(
    host: &Element,
    attachment: &Rc<RefCell<Attachment>>,
) -> Result<(), SidebarJsError> {
    let toggles = host
        .query_selector_all("a.toggle")
        .map_err(|e| SidebarJsError::dom(format!("Cannot find toggles: {e:?}")))?;

    for index in 0..toggles.length() {
        let Some(toggle) = toggles
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(raw_path) = toggle.get_attribute("data-toc-path") else {
            continue;
        };
        let path: NodePath = raw_path.parse().map_err(SidebarError::from)?;

        let state = Rc::clone(attachment);
        let on_toggle = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let mut state = state.borrow_mut();
            let Attachment { sidebar, view, .. } = &mut *state;
            if let Err(e) = sidebar.toggle(&path, view) {
                log::warn!("Toggle failed: {e}");
            }
        });
        toggle
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
            .map_err(|e| SidebarJsError::dom(format!("Cannot listen for toggle {raw_path}: {e:?}")))?;
        on_toggle.forget();
    }
    Ok(())
}
