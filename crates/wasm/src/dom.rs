//! `SidebarView` over the host element.
//!
//! Entries are located through the `data-toc-path` attributes written by the
//! mount step. DOM failures are logged; the sidebar keeps working with
//! whatever was applied.

use tocbar_traits::SidebarView;
use tocbar_types::NodePath;
use wasm_bindgen::JsValue;
use web_sys::{Element, ScrollIntoViewOptions, ScrollLogicalPosition};

#[derive(Debug, Clone)]
pub struct DomView {
    host: Element,
}

impl DomView {
    pub fn new(host: Element) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &Element {
        &self.host
    }

    fn item(&self, path: &NodePath) -> Option<Element> {
        self.query(&format!("li.chapter-item[data-toc-path=\"{path}\"]"))
    }

    /// The navigable anchor of an entry. Toggles carry no `href`.
    fn link(&self, path: &NodePath) -> Option<Element> {
        self.query(&format!(
            "li.chapter-item[data-toc-path=\"{path}\"] > a[href]"
        ))
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.host.query_selector(selector) {
            Ok(element) => element,
            Err(e) => {
                log::warn!("Selector '{selector}' failed: {e:?}");
                None
            }
        }
    }
}

fn report(action: &str, path: &NodePath, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("Could not {action} entry {path}: {e:?}");
    }
}

impl SidebarView for DomView {
    fn mount(&mut self, markup: &str) {
        self.host.set_inner_html(markup);
    }

    fn mark_active(&mut self, path: &NodePath) {
        match self.link(path) {
            Some(link) => report("activate", path, link.class_list().add_1("active")),
            None => log::warn!("No link rendered for active entry {path}"),
        }
    }

    fn set_expanded(&mut self, path: &NodePath, expanded: bool) {
        if let Some(item) = self.item(path) {
            let result = item
                .class_list()
                .toggle_with_force("expanded", expanded)
                .map(|_| ());
            report("expand", path, result);
        }
    }

    fn scroll_top(&self) -> i32 {
        self.host.scroll_top()
    }

    fn set_scroll_top(&mut self, offset: i32) {
        self.host.set_scroll_top(offset);
    }

    fn center_on(&mut self, path: &NodePath) {
        if let Some(target) = self.link(path).or_else(|| self.item(path)) {
            let options = ScrollIntoViewOptions::new();
            options.set_block(ScrollLogicalPosition::Center);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}
