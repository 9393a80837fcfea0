//! Page bootstrap.
//!
//! [`bootstrap`] is what runs when the page is ready: it flags the body as
//! loaded, fills in the copyright year, loads both content folders
//! concurrently, and renders them. Everything the page depends on is passed
//! in (surface, fetcher, clock), so the whole flow runs without a browser.
//!
//! Both loads are joined. If either fails, neither list is rendered: both
//! containers get a failure message and the error goes to the log.
//!
//! # Example
//!
//! ```rust
//! use folio_core::MemoryFetcher;
//! use folio_render::{bootstrap, FixedClock, PageConfig, PageSurface, YEAR_ID};
//!
//! # tokio_test::block_on(async {
//! let fetcher = MemoryFetcher::new()
//!     .with_file("publication/index.yaml", "items:\n")
//!     .with_file("internship/index.yaml", "items:\n");
//! let mut page = PageSurface::new().with_element(YEAR_ID);
//!
//! let outcome = bootstrap(&mut page, &fetcher, &FixedClock(2025), &PageConfig::default()).await;
//! assert!(outcome.is_rendered());
//! assert_eq!(page.inner_html(YEAR_ID), Some("2025"));
//! # });
//! ```

use chrono::Datelike;
use folio_content::load_items;
use folio_core::{Error, Fetcher};

use crate::internships::{write_internships, INTERNSHIP_LIST_ID};
use crate::publications::{write_publications, AuthorHighlight, PUBLICATION_LIST_ID};
use crate::surface::Surface;

/// Element id that receives the current year.
pub const YEAR_ID: &str = "year";

/// Body class added once the page has started loading content.
pub const LOADED_CLASS: &str = "loaded";

const PUBLICATION_FAILURE: &str =
    r#"<p class="empty-message">Failed to load publication YAML.</p>"#;
const INTERNSHIP_FAILURE: &str = r#"<p class="empty-message">Failed to load internship YAML.</p>"#;

// ============================================================================
// Clock
// ============================================================================

/// Source of the copyright year.
pub trait Clock: Send + Sync {
    /// The current calendar year.
    fn current_year(&self) -> i32;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// A clock stuck in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

// ============================================================================
// Configuration and outcome
// ============================================================================

/// Where the page content lives and how it is rendered.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Folder holding the publication index and items.
    pub publications_folder: String,
    /// Folder holding the internship index and items.
    pub internships_folder: String,
    /// Author name to bold in publication author lists.
    pub highlight: AuthorHighlight,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            publications_folder: "publication".to_string(),
            internships_folder: "internship".to_string(),
            highlight: AuthorHighlight::default(),
        }
    }
}

/// Result of a page bootstrap.
#[derive(Debug)]
#[must_use]
pub enum PageOutcome {
    /// Both lists were rendered.
    Rendered {
        /// Number of publications rendered.
        publications: usize,
        /// Number of internships rendered.
        internships: usize,
    },
    /// A load failed; both containers show the failure message.
    Failed {
        /// The first load error.
        error: Error,
    },
}

impl PageOutcome {
    /// Whether both lists were rendered.
    pub fn is_rendered(&self) -> bool {
        matches!(self, PageOutcome::Rendered { .. })
    }

    /// The load error, if the page failed.
    pub fn error(&self) -> Option<&Error> {
        match self {
            PageOutcome::Failed { error } => Some(error),
            PageOutcome::Rendered { .. } => None,
        }
    }
}

// ============================================================================
// Bootstrap
// ============================================================================

/// Load and render both lists into `surface`.
///
/// Never panics and never returns early: every outcome leaves the surface in
/// a displayable state.
pub async fn bootstrap<S, F, C>(
    surface: &mut S,
    fetcher: &F,
    clock: &C,
    config: &PageConfig,
) -> PageOutcome
where
    S: Surface + ?Sized,
    F: Fetcher + ?Sized,
    C: Clock + ?Sized,
{
    surface.add_body_class(LOADED_CLASS);
    if surface.has_element(YEAR_ID) {
        surface.set_text(YEAR_ID, &clock.current_year().to_string());
    }

    let loaded = futures::try_join!(
        load_items(fetcher, &config.publications_folder),
        load_items(fetcher, &config.internships_folder),
    );

    match loaded {
        Ok((publications, internships)) => {
            write_publications(surface, &publications, &config.highlight);
            write_internships(surface, &internships);
            PageOutcome::Rendered {
                publications: publications.len(),
                internships: internships.len(),
            }
        }
        Err(error) => {
            log::error!("Failed to load page content: {error}");
            write_failure(surface);
            PageOutcome::Failed { error }
        }
    }
}

fn write_failure<S>(surface: &mut S)
where
    S: Surface + ?Sized,
{
    if surface.has_element(PUBLICATION_LIST_ID) {
        surface.set_inner_html(PUBLICATION_LIST_ID, PUBLICATION_FAILURE);
    }
    if surface.has_element(INTERNSHIP_LIST_ID) {
        surface.set_inner_html(INTERNSHIP_LIST_ID, INTERNSHIP_FAILURE);
    }
}
