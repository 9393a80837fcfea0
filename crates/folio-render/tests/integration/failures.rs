//! Integration tests for load failures.

use folio_render::{
    bootstrap, FixedClock, PageConfig, PageSurface, Surface, INTERNSHIP_LIST_ID,
    PUBLICATION_LIST_ID, YEAR_ID,
};

use crate::common::{full_page, SiteHarness};

const PUBLICATION_FAILURE: &str =
    r#"<p class="empty-message">Failed to load publication YAML.</p>"#;
const INTERNSHIP_FAILURE: &str = r#"<p class="empty-message">Failed to load internship YAML.</p>"#;

async fn render_without(path: &str, page: &mut PageSurface) -> Option<String> {
    let harness = SiteHarness::without(path);
    let outcome = bootstrap(
        page,
        &harness.fetcher,
        &FixedClock(2026),
        &PageConfig::default(),
    )
    .await;
    outcome.error().and_then(|e| e.path()).map(String::from)
}

#[tokio::test]
async fn test_missing_publication_item_fails_both_lists() {
    let mut page = full_page();
    let failed = render_without("publication/draft.yaml", &mut page).await;

    assert_eq!(failed.as_deref(), Some("publication/draft.yaml"));
    assert_eq!(page.inner_html(PUBLICATION_LIST_ID), Some(PUBLICATION_FAILURE));
    assert_eq!(page.inner_html(INTERNSHIP_LIST_ID), Some(INTERNSHIP_FAILURE));
}

#[tokio::test]
async fn test_missing_internship_index_fails_both_lists() {
    let mut page = full_page();
    let failed = render_without("internship/index.yaml", &mut page).await;

    assert_eq!(failed.as_deref(), Some("internship/index.yaml"));
    assert_eq!(page.inner_html(PUBLICATION_LIST_ID), Some(PUBLICATION_FAILURE));
    assert_eq!(page.inner_html(INTERNSHIP_LIST_ID), Some(INTERNSHIP_FAILURE));
}

#[tokio::test]
async fn test_failure_message_hides_error_details() {
    let mut page = full_page();
    let _ = render_without("internship/acme.yaml", &mut page).await;

    for (_, html) in page.elements() {
        assert!(!html.contains("acme.yaml"));
        assert!(!html.contains("not found"));
    }
}

#[tokio::test]
async fn test_failure_still_sets_year() {
    let mut page = full_page();
    let _ = render_without("publication/index.yaml", &mut page).await;
    assert_eq!(page.inner_html(YEAR_ID), Some("2026"));
}

#[tokio::test]
async fn test_failure_with_only_one_container() {
    let mut page = PageSurface::new().with_element(INTERNSHIP_LIST_ID);
    let failed = render_without("publication/fast-render.yaml", &mut page).await;

    assert!(failed.is_some());
    assert_eq!(page.inner_html(INTERNSHIP_LIST_ID), Some(INTERNSHIP_FAILURE));
    assert!(!page.has_element(PUBLICATION_LIST_ID));
}
