//! HTML escaping.
//!
//! This is the only sanitization step between content files and the output
//! document.

/// Escape `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// `&` is replaced first so the entities introduced by the later
/// replacements are not escaped again. No other characters change.
///
/// # Example
///
/// ```rust
/// use folio_render::escape_html;
///
/// assert_eq!(
///     escape_html("<script>&\"'"),
///     "&lt;script&gt;&amp;&quot;&#39;"
/// );
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
