//! Internship list renderer.
//!
//! Recognized item fields: `company`, `role`, `time`, `location`, `logo`,
//! `website`. All are optional.

use folio_content::Item;

use crate::escape::escape_html;
use crate::surface::Surface;

/// Element id of the internship list container.
pub const INTERNSHIP_LIST_ID: &str = "internshipList";

const EMPTY_MESSAGE: &str = r#"<p class="empty-message">No internship entries yet.</p>"#;
const UNNAMED_COMPANY: &str = "Unnamed Company";
const META_SEPARATOR: &str = " · ";

/// Render the internship list fragment.
///
/// An empty collection renders a placeholder message instead of nothing.
pub fn render_internships(items: &[Item]) -> String {
    if items.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    items.iter().map(render_internship).collect()
}

/// Render into the internship list container, if the surface has one.
pub fn write_internships<S>(surface: &mut S, items: &[Item])
where
    S: Surface + ?Sized,
{
    if !surface.has_element(INTERNSHIP_LIST_ID) {
        return;
    }
    surface.set_inner_html(INTERNSHIP_LIST_ID, &render_internships(items));
}

fn render_internship(item: &Item) -> String {
    let company_field = item.text("company");

    let logo = match item.text("logo") {
        Some(logo) => format!(
            r#"<img src="{}" alt="{}" />"#,
            escape_html(&logo),
            escape_html(company_field.as_deref().unwrap_or("Company logo"))
        ),
        None => r#"<div class="intern-logo-placeholder">No logo</div>"#.to_string(),
    };

    let name = escape_html(company_field.as_deref().unwrap_or(UNNAMED_COMPANY));
    let company = match item.text("website") {
        Some(website) => format!(
            r#"<a href="{}" target="_blank" rel="noreferrer">{name}</a>"#,
            escape_html(&website)
        ),
        None => name,
    };

    let role = escape_html(item.text("role").as_deref().unwrap_or_default());
    let meta = ["time", "location"]
        .into_iter()
        .filter_map(|key| item.text(key))
        .map(|value| escape_html(&value))
        .collect::<Vec<_>>()
        .join(META_SEPARATOR);

    format!(
        concat!(
            r#"<article class="intern-item">"#,
            r#"<div class="intern-logo">{logo}</div>"#,
            r#"<div class="intern-content">"#,
            r#"<h3 class="intern-company">{company}</h3>"#,
            r#"<p class="intern-role">{role}</p>"#,
            r#"<p class="intern-meta">{meta}</p>"#,
            "</div></article>"
        ),
        logo = logo,
        company = company,
        role = role,
        meta = meta,
    )
}
