//! Folio Core: shared error type and file retrieval.
//!
//! This crate provides the foundational pieces used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`fetch`]: The [`Fetcher`] seam plus filesystem, HTTP and in-memory
//!   implementations

#![forbid(unsafe_code)]

pub mod error;
pub mod fetch;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use fetch::{Fetcher, FsFetcher, HttpFetcher, MemoryFetcher};
