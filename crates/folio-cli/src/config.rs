//! Configuration file handling.
//!
//! Settings come from an optional TOML file (`folio.toml` in the working
//! directory, or the file given with `--config`). Every field has a default,
//! so an empty file and a missing default file are both fine:
//!
//! ```toml
//! content_root = "site"
//! # base_url = "https://example.org"   # fetch over HTTP instead of disk
//! publications_folder = "publication"
//! internships_folder = "internship"
//! highlight_author = "Minghui Guo"
//! output_dir = "dist"
//! ```

use std::path::{Path, PathBuf};

use folio_core::{Error, Fetcher, FsFetcher, HttpFetcher, Result};
use folio_render::{AuthorHighlight, PageConfig, DEFAULT_HIGHLIGHT_AUTHOR};
use serde::Deserialize;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Directory the content folders live in.
    pub content_root: PathBuf,
    /// Base URL to fetch content from; takes precedence over `content_root`.
    pub base_url: Option<String>,
    /// Publication folder, relative to the content root.
    pub publications_folder: String,
    /// Internship folder, relative to the content root.
    pub internships_folder: String,
    /// Author to bold in publication lists; empty disables highlighting.
    pub highlight_author: String,
    /// Where `render` writes fragments.
    pub output_dir: PathBuf,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("."),
            base_url: None,
            publications_folder: "publication".to_string(),
            internships_folder: "internship".to_string(),
            highlight_author: DEFAULT_HIGHLIGHT_AUTHOR.to_string(),
            output_dir: PathBuf::from("dist"),
        }
    }
}

impl FolioConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, `folio.toml` is
    /// used if present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a config file.
    ///
    /// An unreadable file is [`Error::Io`]; malformed TOML is
    /// [`Error::Config`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse config text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Point at a local content directory, dropping any base URL.
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.content_root = root;
        self.base_url = None;
        self
    }

    /// Fetch content over HTTP from `base_url`.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Page settings for the bootstrap.
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            publications_folder: self.publications_folder.clone(),
            internships_folder: self.internships_folder.clone(),
            highlight: AuthorHighlight::new(&self.highlight_author),
        }
    }

    /// The fetcher matching the configured content source.
    pub fn fetcher(&self) -> Box<dyn Fetcher> {
        match &self.base_url {
            Some(url) => Box::new(HttpFetcher::new(url.clone())),
            None => Box::new(FsFetcher::new(self.content_root.clone())),
        }
    }

    /// Human-readable content source, for log messages.
    pub fn source(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => self.content_root.display().to_string(),
        }
    }
}
