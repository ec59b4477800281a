//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

#![cfg(target_arch = "wasm32")]

use tocbar_traits::ScrollStore;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};

const SCROLL_KEY: &str = "sidebar-scroll";

wasm_bindgen_test_configure!(run_in_browser);

const TOC: &str = r#"[
    { "label": "A", "href": "a.html" },
    { "label": "B", "href": "b.html", "number": "1.", "children": [
        { "label": "C", "href": "b/c.html", "number": "1.1." }
    ] }
]"#;

fn host() -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let host = document
        .create_element("mdbook-sidebar-scrollbox")
        .expect("create host");
    document
        .body()
        .expect("body")
        .append_child(&host)
        .expect("attach host");
    host
}

/// Cancel link navigation inside `host` so clicks keep the test page loaded.
fn block_navigation(host: &Element) {
    let on_click = Closure::<dyn FnMut(Event)>::new(|event: Event| event.prevent_default());
    host.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .expect("listen for clicks");
    on_click.forget();
}

fn html_element(host: &Element, selector: &str) -> HtmlElement {
    host.query_selector(selector)
        .unwrap()
        .expect(selector)
        .dyn_into::<HtmlElement>()
        .expect("HTML element")
}

fn config(toggles: bool) -> JsValue {
    let config = tocbar_core::SidebarConfig::default()
        .with_path_to_root("../")
        .with_toggles(toggles);
    serde_wasm_bindgen::to_value(&config).expect("serializable config")
}

#[wasm_bindgen_test]
fn test_version() {
    assert!(!tocbar_wasm::get_version().is_empty());
}

#[wasm_bindgen_test]
fn test_initialize_marks_active_and_expands_parent() {
    let host = host();
    tocbar_wasm::initialize_at(&host, TOC, config(false), "https://site/b/c.html")
        .expect("initialize");

    let active = host
        .query_selector("a.active")
        .unwrap()
        .expect("an active link");
    assert_eq!(active.get_attribute("href").as_deref(), Some("../b/c.html"));

    let parent = host
        .query_selector("li.chapter-item[data-toc-path=\"1\"]")
        .unwrap()
        .expect("parent entry");
    assert!(parent.class_list().contains("expanded"));
}

#[wasm_bindgen_test]
fn test_toggle_click_flips_expanded() {
    let host = host();
    tocbar_wasm::initialize_at(&host, TOC, config(true), "https://site/a.html")
        .expect("initialize");

    let item = host
        .query_selector("li.chapter-item[data-toc-path=\"1\"]")
        .unwrap()
        .expect("entry with children");
    let toggle = host
        .query_selector("a.toggle")
        .unwrap()
        .expect("toggle")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("toggle is an HTML element");

    assert!(!item.class_list().contains("expanded"));
    toggle.click();
    assert!(item.class_list().contains("expanded"));
    toggle.click();
    assert!(!item.class_list().contains("expanded"));
}

#[wasm_bindgen_test]
fn test_session_storage_store_is_read_once() {
    let store = tocbar_wasm::SessionStorageStore::new();
    assert!(store.is_available());
    store.set("tocbar-test", "240").unwrap();
    let scroll = tocbar_core::ScrollPersistence::new("tocbar-test");
    assert_eq!(scroll.take(&store), Some(240));
    assert_eq!(scroll.take(&store), None);
}

#[wasm_bindgen_test]
fn test_invalid_toc_is_rejected() {
    let host = host();
    let result = tocbar_wasm::initialize_at(&host, "{ nope", JsValue::UNDEFINED, "https://site/");
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_click_on_section_number_saves_scroll_offset() {
    let host = host();
    let store = tocbar_wasm::SessionStorageStore::new();
    tocbar_wasm::initialize_at(&host, TOC, config(false), "https://site/a.html")
        .expect("initialize");
    block_navigation(&host);
    assert_eq!(store.get(SCROLL_KEY).unwrap(), None);

    html_element(&host, "a[href=\"../b.html\"] strong").click();

    assert!(store.get(SCROLL_KEY).unwrap().is_some());
    store.clear(SCROLL_KEY).unwrap();
}

#[wasm_bindgen_test]
fn test_toggle_click_does_not_save_scroll_offset() {
    let host = host();
    let store = tocbar_wasm::SessionStorageStore::new();
    tocbar_wasm::initialize_at(&host, TOC, config(true), "https://site/a.html")
        .expect("initialize");
    block_navigation(&host);

    html_element(&host, "a.toggle").click();

    assert_eq!(store.get(SCROLL_KEY).unwrap(), None);
}
