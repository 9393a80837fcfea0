//! Subcommand handlers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use folio_content::{load_items, parse_document_with_diagnostics};
use folio_render::{
    bootstrap, PageOutcome, PageSurface, SystemClock, INTERNSHIP_LIST_ID, PUBLICATION_LIST_ID,
    YEAR_ID,
};
use tracing::{info, warn};

use crate::config::FolioConfig;

/// Run the page bootstrap and emit the result.
///
/// Fragments are written even when loading failed (they then hold the
/// failure message), but the exit code reports the failure.
pub async fn render(config: &FolioConfig, json: bool) -> Result<ExitCode> {
    info!(source = %config.source(), "Rendering site lists");

    let fetcher = config.fetcher();
    let mut page =
        PageSurface::new().with_elements([PUBLICATION_LIST_ID, INTERNSHIP_LIST_ID, YEAR_ID]);
    let outcome = bootstrap(&mut page, &*fetcher, &SystemClock, &config.page_config()).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        let written = write_fragments(&page, &config.output_dir).await?;
        info!(
            count = written.len(),
            dir = %config.output_dir.display(),
            "Wrote fragments"
        );
    }

    match outcome {
        PageOutcome::Rendered {
            publications,
            internships,
        } => {
            info!(publications, internships, "Rendered");
            Ok(ExitCode::SUCCESS)
        }
        PageOutcome::Failed { error } => {
            warn!(%error, "Content could not be loaded; failure placeholders written");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Print one parsed file as JSON.
pub async fn parse(file: &Path, diagnostics: bool) -> Result<ExitCode> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let (mapping, report) = parse_document_with_diagnostics(&text);

    println!("{}", serde_json::to_string_pretty(&mapping)?);

    if diagnostics {
        for skipped in report.skipped() {
            eprintln!("line {}: skipped {:?}", skipped.line_number, skipped.content);
        }
        eprintln!("{} line(s) skipped", report.skipped_count());
    }
    Ok(ExitCode::SUCCESS)
}

/// Print one loaded folder as JSON.
pub async fn load(config: &FolioConfig, folder: &str) -> Result<ExitCode> {
    let fetcher = config.fetcher();
    let items = load_items(&*fetcher, folder)
        .await
        .with_context(|| format!("Failed to load '{folder}' from {}", config.source()))?;

    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(ExitCode::SUCCESS)
}

/// Write each element of `page` to `<dir>/<id>.html`.
async fn write_fragments(page: &PageSurface, dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    for (id, html) in page.elements() {
        let path = dir.join(format!("{id}.html"));
        tokio::fs::write(&path, html)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
