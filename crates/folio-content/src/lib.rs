//! Structured-text parsing and content loading.
//!
//! Site content lives in small, hand-edited files that use a tiny subset of
//! YAML: `key: value`, `key:` followed by a block of `- value` lines, and bare
//! `key:`. This crate parses that subset without a general YAML library and
//! assembles folders of such files into ordered item collections.
//!
//! # Modules
//!
//! - [`scalar`]: Single-value normalization (trimming, quote stripping)
//! - [`parser`]: Line-oriented document parser with skipped-line diagnostics
//! - [`value`]: [`Value`] and [`Mapping`], the parsed data model
//! - [`loader`]: Folder loading driven by an `index.yaml` document
//!
//! # Example
//!
//! ```rust
//! use folio_content::parse_document;
//!
//! let doc = parse_document("title: \"Hello\"\nauthors:\n  - Ada\n  - Grace\n");
//! assert_eq!(doc.get_str("title"), Some("Hello"));
//! assert_eq!(doc.get_string_list("authors"), vec!["Ada", "Grace"]);
//! ```

#![forbid(unsafe_code)]

pub mod loader;
pub mod parser;
pub mod scalar;
pub mod value;

// Re-export commonly used types
pub use loader::{load_items, INDEX_FILE, ITEMS_KEY};
pub use parser::{parse_document, parse_document_with_diagnostics, ParseDiagnostics, SkippedLine};
pub use scalar::parse_scalar;
pub use value::{Item, ItemCollection, Mapping, Value};
