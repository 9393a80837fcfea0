//! The host document that rendered fragments are written into.
//!
//! Renderers address elements by id. A surface decides which ids exist;
//! writes to any other id are silently dropped, so a page that leaves out a
//! section simply does not get it rendered.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::escape::escape_html;

/// A document with addressable elements.
pub trait Surface {
    /// Whether an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Replace the inner HTML of `id`. No-op if the element does not exist.
    fn set_inner_html(&mut self, id: &str, html: &str);

    /// Replace the content of `id` with plain text. No-op if the element
    /// does not exist.
    fn set_text(&mut self, id: &str, text: &str);

    /// Add a class to the document body.
    fn add_body_class(&mut self, class: &str);
}

/// In-memory [`Surface`] with a fixed set of element ids.
///
/// # Example
///
/// ```rust
/// use folio_render::{PageSurface, Surface};
///
/// let mut page = PageSurface::new().with_element("year");
/// page.set_text("year", "2024");
/// page.set_text("missing", "ignored");
///
/// assert_eq!(page.inner_html("year"), Some("2024"));
/// assert_eq!(page.inner_html("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageSurface {
    elements: BTreeMap<String, String>,
    body_classes: BTreeSet<String>,
}

impl PageSurface {
    /// Create a surface with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an (initially empty) element.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.entry(id.into()).or_default();
        self
    }

    /// Declare several elements at once.
    pub fn with_elements<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter().fold(self, |page, id| page.with_element(id))
    }

    /// Current inner HTML of `id`, if the element exists.
    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// Iterate over `(id, inner_html)` pairs in id order.
    pub fn elements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.elements.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether the body carries `class`.
    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }
}

impl Surface for PageSurface {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_inner_html(&mut self, id: &str, html: &str) {
        if let Some(slot) = self.elements.get_mut(id) {
            *slot = html.to_string();
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(slot) = self.elements.get_mut(id) {
            *slot = escape_html(text);
        }
    }

    fn add_body_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_string());
    }
}
