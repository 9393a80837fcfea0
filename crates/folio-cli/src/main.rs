//! Folio CLI
//!
//! Renders the publication and internship lists of a site from its content
//! folders, and offers a few commands for inspecting content files.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::FolioConfig;

/// Folio - render site lists from content files
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Configuration file path (default: ./folio.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load both lists and write the rendered fragments
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory for `<element-id>.html` files
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the rendered page as JSON instead of writing files
        #[arg(long)]
        json: bool,
    },
    /// Parse one content file and print it as JSON
    Parse {
        /// File to parse
        file: PathBuf,

        /// Report skipped lines on stderr
        #[arg(long)]
        diagnostics: bool,
    },
    /// Load one content folder and print its items as JSON
    Load {
        /// Folder relative to the content root (e.g. "publication")
        folder: String,

        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where content is read from.
#[derive(Args, Debug)]
struct SourceArgs {
    /// Content root directory
    #[arg(long, conflicts_with = "base_url")]
    root: Option<PathBuf>,

    /// Base URL to fetch content from
    #[arg(long)]
    base_url: Option<String>,
}

impl SourceArgs {
    fn apply(self, config: FolioConfig) -> FolioConfig {
        match (self.root, self.base_url) {
            (Some(root), _) => config.with_root(root),
            (None, Some(url)) => config.with_base_url(url),
            (None, None) => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli).await
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Render { source, out, json } => {
            let mut config = source.apply(FolioConfig::load(cli.config.as_deref())?);
            if let Some(out) = out {
                config.output_dir = out;
            }
            commands::render(&config, json).await
        }
        // Parsing a single file never reads the config.
        Command::Parse { file, diagnostics } => commands::parse(&file, diagnostics).await,
        Command::Load { folder, source } => {
            let config = source.apply(FolioConfig::load(cli.config.as_deref())?);
            commands::load(&config, &folder).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
