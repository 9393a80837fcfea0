//! Publication list renderer.
//!
//! Recognized item fields: `title`, `venue`, `year`, `status`, `authors`
//! (list), `cover`, and the links `code`, `website`, `paper`. All are
//! optional.

use folio_content::Item;
use regex::{Regex, RegexBuilder};

use crate::escape::escape_html;
use crate::surface::Surface;

/// Element id of the publication list container.
pub const PUBLICATION_LIST_ID: &str = "publicationList";

/// Author name highlighted in bold unless configured otherwise.
pub const DEFAULT_HIGHLIGHT_AUTHOR: &str = "Minghui Guo";

const EMPTY_MESSAGE: &str = r#"<p class="empty-message">No publication entries yet.</p>"#;

/// Bolds one author's name inside escaped author text.
///
/// Matching is case-insensitive and also takes up to two trailing `*`
/// (equal-contribution and corresponding-author marks).
///
/// # Example
///
/// ```rust
/// use folio_render::AuthorHighlight;
///
/// let highlight = AuthorHighlight::new("Minghui Guo");
/// assert_eq!(highlight.apply("minghui guo**"), "<b>minghui guo**</b>");
/// assert_eq!(highlight.apply("Ada Lovelace"), "Ada Lovelace");
/// ```
#[derive(Debug, Clone)]
pub struct AuthorHighlight {
    pattern: Option<Regex>,
}

impl AuthorHighlight {
    /// Highlight `name`. An empty name highlights nothing.
    pub fn new(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return Self::none();
        }
        let source = format!(r"{}\*{{0,2}}", regex::escape(&escape_html(name)));
        match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(pattern) => Self {
                pattern: Some(pattern),
            },
            Err(e) => {
                log::warn!("Cannot highlight author {name:?}: {e}");
                Self::none()
            }
        }
    }

    /// Highlight nobody.
    pub fn none() -> Self {
        Self { pattern: None }
    }

    /// Wrap every match in `escaped` with `<b>...</b>`.
    ///
    /// `escaped` must already be HTML-escaped, so only literal text can match.
    pub fn apply(&self, escaped: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(escaped, "<b>$0</b>").into_owned(),
            None => escaped.to_string(),
        }
    }
}

impl Default for AuthorHighlight {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_AUTHOR)
    }
}

/// Render the publication list fragment.
///
/// An empty collection renders a placeholder message instead of nothing.
pub fn render_publications(items: &[Item], highlight: &AuthorHighlight) -> String {
    if items.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    items
        .iter()
        .map(|item| render_publication(item, highlight))
        .collect()
}

/// Render into the publication list container, if the surface has one.
pub fn write_publications<S>(surface: &mut S, items: &[Item], highlight: &AuthorHighlight)
where
    S: Surface + ?Sized,
{
    if !surface.has_element(PUBLICATION_LIST_ID) {
        return;
    }
    surface.set_inner_html(PUBLICATION_LIST_ID, &render_publications(items, highlight));
}

fn render_publication(item: &Item, highlight: &AuthorHighlight) -> String {
    let title = item.text("title");
    let venue = item
        .text("venue")
        .map(|v| format!("<b>{}</b>", escape_html(&v)))
        .unwrap_or_default();
    let year = item
        .text("year")
        .map(|y| format!(" ({})", escape_html(&y)))
        .unwrap_or_default();
    let status = item
        .text("status")
        .map(|s| format!(" {}", escape_html(&s)))
        .unwrap_or_default();
    let authors = item
        .get_list("authors")
        .unwrap_or_default()
        .iter()
        .map(|author| highlight.apply(&escape_html(author)))
        .collect::<Vec<_>>()
        .join(", ");

    let (thumb_class, thumb) = match item.text("cover") {
        Some(cover) => (
            "pub-thumb",
            format!(
                r#"<img src="{}" alt="{}" />"#,
                escape_html(&cover),
                escape_html(title.as_deref().unwrap_or("Publication cover"))
            ),
        ),
        None => ("pub-thumb pub-thumb-empty", "Coming soon".to_string()),
    };

    let mut html = String::new();
    html.push_str(r#"<article class="pub-item">"#);
    html.push_str(&format!(r#"<div class="{thumb_class}">{thumb}</div>"#));
    html.push_str(r#"<div class="pub-content">"#);
    html.push_str(&format!(
        "<h3>{}</h3>",
        escape_html(title.as_deref().unwrap_or_default())
    ));
    html.push_str(&format!(r#"<p class="pub-meta">{venue}{year}{status}</p>"#));
    if !authors.is_empty() {
        html.push_str(&format!(r#"<p class="pub-authors">{authors}</p>"#));
    }
    html.push_str(&render_links(item));
    html.push_str("</div></article>");
    html
}

fn render_links(item: &Item) -> String {
    let links: Vec<String> = ["code", "website", "paper"]
        .into_iter()
        .filter_map(|label| {
            item.text(label).map(|href| {
                format!(
                    r#"<a href="{}" target="_blank" rel="noreferrer">{label}</a>"#,
                    escape_html(&href)
                )
            })
        })
        .collect();

    if links.is_empty() {
        return String::new();
    }
    format!(r#"<p class="pub-links">{}</p>"#, links.join("<span>/</span>"))
}

// ============================================================================
// Tests
// ============================================================================
