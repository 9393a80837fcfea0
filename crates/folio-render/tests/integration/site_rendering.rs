//! Integration tests for rendering a complete site.

use folio_core::FsFetcher;
use folio_render::{
    bootstrap, FixedClock, PageConfig, PageOutcome, INTERNSHIP_LIST_ID, LOADED_CLASS,
    PUBLICATION_LIST_ID, YEAR_ID,
};

use crate::common::{full_page, RecordingFetcher, SiteHarness, ACME, FAST_RENDER};

#[tokio::test]
async fn test_site_renders_both_lists() {
    let harness = SiteHarness::new();
    let mut page = full_page();

    let outcome = bootstrap(
        &mut page,
        &harness.fetcher,
        &FixedClock(2026),
        &PageConfig::default(),
    )
    .await;

    assert!(matches!(
        outcome,
        PageOutcome::Rendered {
            publications: 2,
            internships: 1
        }
    ));
    assert!(page.has_body_class(LOADED_CLASS));
    assert_eq!(page.inner_html(YEAR_ID), Some("2026"));
}

#[tokio::test]
async fn test_publications_follow_index_order_and_formatting() {
    let harness = SiteHarness::new();
    let mut page = full_page();
    let _ = bootstrap(
        &mut page,
        &harness.fetcher,
        &FixedClock(2026),
        &PageConfig::default(),
    )
    .await;

    let html = page.inner_html(PUBLICATION_LIST_ID).unwrap();
    let fast = html.find("Fast Rendering").unwrap();
    let draft = html.find("Work in Progress").unwrap();
    assert!(fast < draft, "index order must be preserved");

    assert!(html.contains("<h3>Fast Rendering of &lt;Everything&gt;</h3>"));
    assert!(html.contains(r#"<p class="pub-meta"><b>CVPR</b> (2024) Highlight</p>"#));
    assert!(html.contains("Ada Lovelace, <b>Minghui Guo*</b>, Grace Hopper"));
    assert!(html.contains(r#"<img src="img/fast-render.png""#));
    assert!(html.contains(">code</a><span>/</span><a "));

    // The draft has no cover, no metadata and no links.
    assert!(html.contains(r#"<div class="pub-thumb pub-thumb-empty">Coming soon</div>"#));
    assert_eq!(html.matches(r#"class="pub-links""#).count(), 1);
}

#[tokio::test]
async fn test_internship_rendering() {
    let harness = SiteHarness::new();
    let mut page = full_page();
    let _ = bootstrap(
        &mut page,
        &harness.fetcher,
        &FixedClock(2026),
        &PageConfig::default(),
    )
    .await;

    let html = page.inner_html(INTERNSHIP_LIST_ID).unwrap();
    assert!(html.contains(
        r#"<a href="https://acme.example" target="_blank" rel="noreferrer">Acme &amp; Co</a>"#
    ));
    assert!(html.contains(r#"<p class="intern-meta">2023.06 - 2023.09 · Beijing</p>"#));
    assert!(html.contains("intern-logo-placeholder"));
}

#[tokio::test]
async fn test_every_listed_file_is_fetched_once() {
    let harness = SiteHarness::new();
    let fetcher = RecordingFetcher::new(harness.fetcher);
    let mut page = full_page();
    let _ = bootstrap(&mut page, &fetcher, &FixedClock(2026), &PageConfig::default()).await;

    assert_eq!(
        fetcher.requested(),
        vec![
            "internship/acme.yaml",
            "internship/index.yaml",
            "publication/draft.yaml",
            "publication/fast-render.yaml",
            "publication/index.yaml",
        ]
    );
}

#[tokio::test]
async fn test_site_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("publication")).unwrap();
    std::fs::create_dir_all(root.join("internship")).unwrap();
    std::fs::write(
        root.join("publication/index.yaml"),
        "items:\n  - fast-render.yaml\n",
    )
    .unwrap();
    std::fs::write(root.join("publication/fast-render.yaml"), FAST_RENDER).unwrap();
    std::fs::write(root.join("internship/index.yaml"), "items:\n  - acme.yaml\n").unwrap();
    std::fs::write(root.join("internship/acme.yaml"), ACME).unwrap();

    let mut page = full_page();
    let outcome = bootstrap(
        &mut page,
        &FsFetcher::new(root),
        &FixedClock(2026),
        &PageConfig::default(),
    )
    .await;

    assert!(outcome.is_rendered(), "unexpected outcome: {outcome:?}");
    assert!(page
        .inner_html(PUBLICATION_LIST_ID)
        .unwrap()
        .contains("<b>Minghui Guo*</b>"));
}
