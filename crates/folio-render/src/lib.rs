//! HTML fragment rendering for the publication and internship lists.
//!
//! The renderers are pure functions from an item collection to an HTML
//! string. Every value taken from a content file goes through
//! [`escape_html`] before it is placed in a template.
//!
//! # Modules
//!
//! - [`escape`]: HTML escaping
//! - [`surface`]: The host document the fragments are written into
//! - [`publications`]: Publication list renderer and author highlighting
//! - [`internships`]: Internship list renderer
//! - [`page`]: Page bootstrap joining both loads and renders
//!
//! # Example
//!
//! ```rust
//! use folio_content::Mapping;
//! use folio_render::render_internships;
//!
//! let item: Mapping = [("company", "Acme & Co"), ("role", "Intern")].into_iter().collect();
//! let html = render_internships(&[item]);
//! assert!(html.contains("Acme &amp; Co"));
//! ```

#![forbid(unsafe_code)]

pub mod escape;
pub mod internships;
pub mod page;
pub mod publications;
pub mod surface;

// Re-export commonly used items
pub use escape::escape_html;
pub use internships::{render_internships, write_internships, INTERNSHIP_LIST_ID};
pub use page::{
    bootstrap, Clock, FixedClock, PageConfig, PageOutcome, SystemClock, LOADED_CLASS, YEAR_ID,
};
pub use publications::{
    render_publications, write_publications, AuthorHighlight, DEFAULT_HIGHLIGHT_AUTHOR,
    PUBLICATION_LIST_ID,
};
pub use surface::{PageSurface, Surface};
