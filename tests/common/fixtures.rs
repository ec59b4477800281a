use tocbar::{TocNode, TocTree};

/// `[a.html, b.html -> [b/c.html]]`
pub fn two_chapters() -> TocTree {
    TocTree::new(vec![
        TocNode::chapter("A", "a.html"),
        TocNode::chapter("B", "b.html").with_children(vec![TocNode::chapter("C", "b/c.html")]),
    ])
}

/// A book laid out the way the generator emits it: affixes, numbered
/// chapters, a part title, a draft and a separator.
pub fn book_json() -> &'static str {
    r#"[
        { "label": "Overview", "href": "overview.html", "affix": true, "expanded": true },
        { "label": "Introduction", "href": "intro.html", "affix": true, "expanded": true },
        { "kind": "partTitle", "label": "User Guide" },
        { "label": "The module", "href": "module.html", "number": "1.", "children": [
            { "label": "Sources", "href": "module/sources.html", "number": "1.1." },
            { "label": "Rules", "href": "module/rules.html", "number": "1.2.", "children": [
                { "label": "Attributes", "href": "module/rules/attributes.html", "number": "1.2.1." }
            ] }
        ] },
        { "label": "Execution", "href": "execution.html", "number": "2.", "children": [
            { "label": "Backends", "href": "execution/backends.html", "number": "2.1." },
            { "label": "Future work", "number": "2.2." }
        ] },
        { "kind": "separator" },
        { "label": "FAQ", "href": "faq.html", "affix": true, "expanded": true }
    ]"#
}

pub fn book() -> TocTree {
    TocTree::from_json(book_json()).expect("fixture is valid")
}
