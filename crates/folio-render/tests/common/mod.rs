//! Common test utilities for page pipeline integration tests.

use std::sync::Mutex;

use async_trait::async_trait;
use folio_core::{Fetcher, MemoryFetcher, Result};
use folio_render::{PageSurface, INTERNSHIP_LIST_ID, PUBLICATION_LIST_ID, YEAR_ID};

/// Index plus two publications, one of them fully populated.
pub const PUBLICATION_INDEX: &str = "\
# Shown newest first
items:
  - fast-render.yaml
  - draft.yaml
";

pub const FAST_RENDER: &str = "\
title: \"Fast Rendering of <Everything>\"
venue: CVPR
year: 2024
status: Highlight
authors:
  - Ada Lovelace
  - Minghui Guo*
  - 'Grace Hopper'
cover: img/fast-render.png
code: https://github.com/example/fast-render
paper: https://arxiv.org/abs/2401.00001
";

pub const DRAFT: &str = "\
title: Work in Progress
status:
this line is not valid and is skipped
";

pub const INTERNSHIP_INDEX: &str = "items:\r\n  - acme.yaml\r\n";

pub const ACME: &str = "\
company: Acme & Co
role: Research Intern
time: 2023.06 - 2023.09
location: Beijing
website: https://acme.example
";

/// Test harness holding a complete in-memory site.
pub struct SiteHarness {
    /// Fetcher serving the site
    pub fetcher: MemoryFetcher,
}

impl SiteHarness {
    /// A site with two publications and one internship.
    pub fn new() -> Self {
        let fetcher = MemoryFetcher::new()
            .with_file("publication/index.yaml", PUBLICATION_INDEX)
            .with_file("publication/fast-render.yaml", FAST_RENDER)
            .with_file("publication/draft.yaml", DRAFT)
            .with_file("internship/index.yaml", INTERNSHIP_INDEX)
            .with_file("internship/acme.yaml", ACME);
        Self { fetcher }
    }

    /// The same site without `path`.
    pub fn without(path: &str) -> Self {
        let mut fetcher = MemoryFetcher::new();
        for (p, text) in [
            ("publication/index.yaml", PUBLICATION_INDEX),
            ("publication/fast-render.yaml", FAST_RENDER),
            ("publication/draft.yaml", DRAFT),
            ("internship/index.yaml", INTERNSHIP_INDEX),
            ("internship/acme.yaml", ACME),
        ] {
            if p != path {
                fetcher.insert(p, text);
            }
        }
        Self { fetcher }
    }
}

impl Default for SiteHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A page with every element the pipeline writes to.
pub fn full_page() -> PageSurface {
    PageSurface::new().with_elements([PUBLICATION_LIST_ID, INTERNSHIP_LIST_ID, YEAR_ID])
}

/// Wraps a fetcher and records every requested path.
pub struct RecordingFetcher<F> {
    inner: F,
    requested: Mutex<Vec<String>>,
}

impl<F> RecordingFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Requested paths, sorted.
    pub fn requested(&self) -> Vec<String> {
        let mut paths = self.requested.lock().unwrap().clone();
        paths.sort();
        paths
    }
}

#[async_trait]
impl<F: Fetcher> Fetcher for RecordingFetcher<F> {
    async fn fetch(&self, path: &str) -> Result<String> {
        self.requested.lock().unwrap().push(path.to_string());
        self.inner.fetch(path).await
    }
}
