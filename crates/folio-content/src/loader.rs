//! Folder loading.
//!
//! A content folder holds an index document plus one document per item:
//!
//! ```text
//! publication/
//! ├── index.yaml        items:
//! ├── paper-a.yaml        - paper-a.yaml
//! └── paper-b.yaml        - paper-b.yaml
//! ```
//!
//! [`load_items`] reads the index, fetches every listed file concurrently and
//! returns the parsed items in index order. The first failed fetch fails the
//! whole load; there is no partial result.

use folio_core::{Fetcher, Result};
use futures::future::try_join_all;

use crate::parser::parse_document;
use crate::value::{ItemCollection, Mapping};

/// Name of the index document inside a content folder.
pub const INDEX_FILE: &str = "index.yaml";

/// Index key listing the folder's item files.
pub const ITEMS_KEY: &str = "items";

/// Load every item listed in `folder`'s index.
///
/// A missing or non-list `items` key yields an empty collection. Item fetches
/// run concurrently; the returned order is the index order, not completion
/// order.
pub async fn load_items<F>(fetcher: &F, folder: &str) -> Result<ItemCollection>
where
    F: Fetcher + ?Sized,
{
    let index = fetch_document(fetcher, join_path(folder, INDEX_FILE)).await?;
    let files = index.get_string_list(ITEMS_KEY);
    log::debug!("Index of '{folder}' lists {} item(s)", files.len());

    let items = try_join_all(
        files
            .iter()
            .map(|file| fetch_document(fetcher, join_path(folder, file))),
    )
    .await?;

    log::info!("Loaded {} item(s) from '{folder}'", items.len());
    Ok(items)
}

async fn fetch_document<F>(fetcher: &F, path: String) -> Result<Mapping>
where
    F: Fetcher + ?Sized,
{
    let text = fetcher.fetch(&path).await?;
    Ok(parse_document(&text))
}

fn join_path(folder: &str, file: &str) -> String {
    let folder = folder.trim_end_matches('/');
    if folder.is_empty() {
        file.to_string()
    } else {
        format!("{folder}/{file}")
    }
}

// ============================================================================
// Tests
// ============================================================================
