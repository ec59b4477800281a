#![allow(dead_code)]

pub mod fixtures;

use std::collections::BTreeMap;
use tocbar::{NodePath, SidebarView};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A `SidebarView` that keeps the state a browser element would show.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingView {
    pub markup: String,
    pub mounts: usize,
    pub active: Vec<NodePath>,
    pub expanded: BTreeMap<NodePath, bool>,
    pub scroll_top: i32,
    pub centered: Option<NodePath>,
    pub steps: Vec<&'static str>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths set to expanded since the last mount.
    pub fn expanded_paths(&self) -> Vec<NodePath> {
        self.expanded
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(path, _)| path.clone())
            .collect()
    }
}

impl SidebarView for RecordingView {
    fn mount(&mut self, markup: &str) {
        self.markup = markup.to_string();
        self.mounts += 1;
        self.active.clear();
        self.expanded.clear();
        self.scroll_top = 0;
        self.centered = None;
        self.steps.push("mount");
    }

    fn mark_active(&mut self, path: &NodePath) {
        self.active.push(path.clone());
        self.steps.push("active");
    }

    fn set_expanded(&mut self, path: &NodePath, expanded: bool) {
        self.expanded.insert(path.clone(), expanded);
        self.steps.push("expand");
    }

    fn scroll_top(&self) -> i32 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: i32) {
        self.scroll_top = offset;
        self.steps.push("scroll");
    }

    fn center_on(&mut self, path: &NodePath) {
        self.centered = Some(path.clone());
        self.steps.push("center");
    }
}
