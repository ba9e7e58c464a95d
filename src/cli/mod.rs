//! Command-line interface.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Knowledge-base article retrieval service.
#[derive(Parser)]
#[command(name = "oraculum", version, about)]
pub struct Cli {
    /// Output JSON instead of human-readable tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a configuration file (defaults to oraculum.yaml plus ORACULUM_* env)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the articles most relevant to a query
    Search(commands::search::SearchArgs),
    /// Trigger the ingestion process and reload the corpus on changes
    Sync,
    /// Generate and cache missing embeddings for the corpus
    Backfill,
    /// Show corpus and cache statistics
    Status,
}

/// Load configuration, honoring an explicit `--config` path.
pub fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Report a fatal error and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({ "success": false, "error": format!("{err:#}") });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
