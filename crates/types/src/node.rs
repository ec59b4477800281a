use serde::{Deserialize, Serialize};

/// What a table-of-contents entry is, independent of where it links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// A chapter or section. Without an href it is a draft label.
    #[default]
    Chapter,
    /// A visual spacer between groups of chapters.
    Separator,
    /// A heading-only label introducing a part of the book.
    PartTitle,
}

/// One entry of the table of contents.
///
/// The shape of the tree is fixed at build time. Only `expanded` and `active`
/// change while a page is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocNode {
    #[serde(default, skip_serializing_if = "NodeKind::is_chapter")]
    pub kind: NodeKind,
    /// Link relative to the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub label: String,
    /// Section number rendered before the label, e.g. `"1.2."`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Unnumbered prefix/suffix chapter.
    #[serde(default, skip_serializing_if = "is_false")]
    pub affix: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocNode>,
    #[serde(default)]
    pub expanded: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub active: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl NodeKind {
    fn is_chapter(&self) -> bool {
        matches!(self, NodeKind::Chapter)
    }
}

impl TocNode {
    pub fn chapter(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::draft(label)
        }
    }

    /// A chapter without a page yet.
    pub fn draft(label: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Chapter,
            href: None,
            label: label.into(),
            number: None,
            affix: false,
            children: Vec::new(),
            expanded: false,
            active: false,
        }
    }

    pub fn separator() -> Self {
        Self {
            kind: NodeKind::Separator,
            ..Self::draft("")
        }
    }

    pub fn part_title(label: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::PartTitle,
            ..Self::draft(label)
        }
    }

    pub fn with_children(mut self, children: Vec<TocNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_affix(mut self, affix: bool) -> Self {
        self.affix = affix;
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// The href this node navigates to, if it is a chapter with a usable link.
    ///
    /// Blank hrefs are treated like missing ones.
    pub fn navigable_href(&self) -> Option<&str> {
        match self.kind {
            NodeKind::Chapter => self
                .href
                .as_deref()
                .map(str::trim)
                .filter(|href| !href.is_empty()),
            NodeKind::Separator | NodeKind::PartTitle => None,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigable_href() {
        assert_eq!(TocNode::chapter("A", "a.html").navigable_href(), Some("a.html"));
        assert_eq!(TocNode::chapter("A", "  ").navigable_href(), None);
        assert_eq!(TocNode::draft("Draft").navigable_href(), None);
        assert_eq!(TocNode::separator().navigable_href(), None);

        let mut part = TocNode::part_title("Part I");
        part.href = Some("part.html".to_string());
        assert_eq!(part.navigable_href(), None);
    }

    #[test]
    fn test_deserialize_defaults() {
        let node: TocNode = serde_json::from_str(r#"{ "label": "Intro", "href": "intro.html" }"#)
            .expect("valid node");
        assert_eq!(node.kind, NodeKind::Chapter);
        assert!(!node.expanded);
        assert!(!node.active);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_deserialize_kinds() {
        let node: TocNode =
            serde_json::from_str(r#"{ "kind": "partTitle", "label": "Part I" }"#).unwrap();
        assert_eq!(node.kind, NodeKind::PartTitle);
        let node: TocNode = serde_json::from_str(r#"{ "kind": "separator" }"#).unwrap();
        assert_eq!(node.kind, NodeKind::Separator);
    }

    #[test]
    fn test_serialize_skips_defaults() {
        let json = serde_json::to_string(&TocNode::chapter("A", "a.html")).unwrap();
        assert_eq!(json, r#"{"href":"a.html","label":"A","expanded":false}"#);
    }
}
