//! File retrieval for content documents.
//!
//! The rendering pipeline never touches the filesystem or the network
//! directly. It asks a [`Fetcher`] for the raw text of a path relative to the
//! content root (`publication/index.yaml`, `internship/acme.yaml`, ...).
//!
//! # Implementations
//!
//! - [`FsFetcher`]: reads files below a local directory
//! - [`HttpFetcher`]: GETs files below a base URL, as the published site does
//! - [`MemoryFetcher`]: serves a fixed set of documents (tests, embedding)
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Fetcher, MemoryFetcher};
//!
//! # tokio_test::block_on(async {
//! let fetcher = MemoryFetcher::new().with_file("publication/index.yaml", "items:\n  - a.yaml\n");
//! let text = fetcher.fetch("publication/index.yaml").await.unwrap();
//! assert!(text.starts_with("items:"));
//! # });
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;

use crate::{Error, Result};

/// Retrieves the raw text of a content file.
///
/// Paths are `/`-separated and relative to whatever root the implementation
/// was built with. A missing file, a transport failure or a non-success
/// status are all reported as [`Error::Fetch`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the full text at `path`.
    async fn fetch(&self, path: &str) -> Result<String>;
}

// ============================================================================
// FsFetcher
// ============================================================================

/// Reads content files from a local directory.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    /// Create a fetcher rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl Fetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        log::trace!("Reading {}", full.display());
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|e| Error::fetch(path, e.to_string()))
    }
}

// ============================================================================
// HttpFetcher
// ============================================================================

/// Fetches content files over HTTP below a base URL.
///
/// Every request is sent with `Cache-Control: no-store` so edits to the
/// content files show up on the next render.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher for `base_url` (a trailing `/` is optional).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a fetcher that reuses an existing client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Full URL for a content path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        log::trace!("GET {url}");
        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| Error::fetch(path, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(path, format!("status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| Error::fetch(path, e.to_string()))
    }
}

// ============================================================================
// MemoryFetcher
// ============================================================================

/// Serves a fixed set of documents from memory.
///
/// Any path that was not registered fails with [`Error::Fetch`], which makes
/// it convenient for exercising failure paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    files: HashMap<String, String>,
}

impl MemoryFetcher {
    /// Create an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` under `path`.
    pub fn with_file(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Register `text` under `path`, replacing any previous document.
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no documents are registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn fetch(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::fetch(path, "not found"))
    }
}

// ============================================================================
// Tests
// ============================================================================
