//! Current-page URL handling and link rewriting.

use crate::error::SidebarError;
use log::warn;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Links with a scheme or a protocol-relative prefix point off-site.
static EXTERNAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z+]+:)?//").expect("BUG: invalid EXTERNAL_LINK_RE regex literal")
});

/// Canonical form of a page URL used for matching.
///
/// Drops the fragment and maps a directory URL to its `index.html`.
/// Applying it twice gives the same result as applying it once.
pub fn canonicalize(url: &str) -> String {
    let without_fragment = match url.split_once('#') {
        Some((before, _)) => before,
        None => url,
    };
    let mut canonical = without_fragment.to_string();
    if canonical.ends_with('/') {
        canonical.push_str("index.html");
    }
    canonical
}

/// Whether `href` is left untouched by root rewriting.
pub fn is_fragment_or_external(href: &str) -> bool {
    href.starts_with('#') || EXTERNAL_LINK_RE.is_match(href)
}

/// Prefix a site-relative `href` with the path back to the site root.
pub fn rewrite_href(path_to_root: &str, href: &str) -> String {
    if is_fragment_or_external(href) {
        href.to_string()
    } else {
        format!("{path_to_root}{href}")
    }
}

/// The page the sidebar is displayed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    base: Option<Url>,
    canonical: String,
}

impl PageLocation {
    /// Parse the current page URL, degrading to textual matching when it is
    /// not an absolute URL.
    pub fn parse(current_url: &str) -> Self {
        match Self::try_parse(current_url) {
            Ok(location) => location,
            Err(e) => {
                warn!("{e}; falling back to textual link matching");
                Self {
                    base: None,
                    canonical: canonicalize(current_url),
                }
            }
        }
    }

    pub fn try_parse(current_url: &str) -> Result<Self, SidebarError> {
        let base = Url::parse(current_url).map_err(|e| SidebarError::InvalidUrl {
            url: current_url.to_string(),
            message: e.to_string(),
        })?;
        let canonical = canonicalize(base.as_str());
        Ok(Self {
            base: Some(base),
            canonical,
        })
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn is_absolute(&self) -> bool {
        self.base.is_some()
    }

    /// Whether the page looks like a directory index.
    pub fn is_index_page(&self) -> bool {
        self.canonical.ends_with("/index.html")
    }

    /// The absolute form of a rewritten link, as a browser would resolve it
    /// against this page.
    pub fn resolve_link(&self, href: &str) -> String {
        match &self.base {
            Some(base) => match base.join(href) {
                Ok(url) => url.into(),
                Err(_) => href.to_string(),
            },
            None => href.to_string(),
        }
    }
}
