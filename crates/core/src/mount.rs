//! Rendering of the tree as nested list markup.
//!
//! The children of an entry live in the list item that immediately follows
//! the entry's own item:
//!
//! ```text
//! <ol class="chapter">
//!   <li class="chapter-item expanded " data-toc-path="0"><a href="b.html">B</a></li>
//!   <li class="section-container"><ol class="section">...</ol></li>
//! </ol>
//! ```
//!
//! Every entry carries its [`NodePath`] in `data-toc-path` so events on the
//! mounted markup can be mapped back to tree nodes.

use crate::config::SidebarConfig;
use crate::location::rewrite_href;
use quick_xml::escape::escape;
use std::fmt::Write;
use tocbar_types::{NodeKind, NodePath, TocNode, TocTree};

/// Render `tree` with its current `expanded`/`active` flags.
pub fn render(tree: &TocTree, config: &SidebarConfig) -> String {
    let mut out = String::with_capacity(tree.len() * 96);
    render_list(&mut out, tree.nodes(), &NodePath::default(), "chapter", config);
    out
}

fn render_list(
    out: &mut String,
    nodes: &[TocNode],
    parent: &NodePath,
    class: &str,
    config: &SidebarConfig,
) {
    let _ = write!(out, "<ol class=\"{class}\">");
    for (index, node) in nodes.iter().enumerate() {
        let path = parent.child(index);
        render_item(out, node, &path, config);
        if node.has_children() {
            out.push_str("<li class=\"section-container\">");
            render_list(out, &node.children, &path, "section", config);
            out.push_str("</li>");
        }
    }
    out.push_str("</ol>");
}

fn render_item(out: &mut String, node: &TocNode, path: &NodePath, config: &SidebarConfig) {
    match node.kind {
        NodeKind::Separator => {
            out.push_str("<li class=\"spacer\"></li>");
        }
        NodeKind::PartTitle => {
            let _ = write!(
                out,
                "<li class=\"part-title\" data-toc-path=\"{path}\">{}</li>",
                escape(node.label.as_str())
            );
        }
        NodeKind::Chapter => {
            out.push_str("<li class=\"chapter-item ");
            if node.expanded {
                out.push_str("expanded ");
            }
            if node.affix {
                out.push_str("affix ");
            }
            let _ = write!(out, "\" data-toc-path=\"{path}\">");

            match node.navigable_href() {
                Some(href) => {
                    let href = rewrite_href(&config.path_to_root, href);
                    let _ = write!(out, "<a href=\"{}\"", escape(href.as_str()));
                    if node.active {
                        out.push_str(" class=\"active\"");
                    }
                    out.push('>');
                    render_label(out, node);
                    out.push_str("</a>");
                }
                None => {
                    out.push_str("<div>");
                    render_label(out, node);
                    out.push_str("</div>");
                }
            }

            if config.toggles && node.has_children() {
                let _ = write!(
                    out,
                    "<a class=\"toggle\" data-toc-path=\"{path}\"><div>❱</div></a>"
                );
            }
            out.push_str("</li>");
        }
    }
}

fn render_label(out: &mut String, node: &TocNode) {
    if let Some(number) = &node.number {
        let _ = write!(
            out,
            "<strong aria-hidden=\"true\">{}</strong> ",
            escape(number.as_str())
        );
    }
    out.push_str(&escape(node.label.as_str()));
}
