//! Child-process content source.
//!
//! Invokes the external ingestion script and scans its output for the
//! change-detection sentinel. The sentinel-string contract is fragile but
//! matches what the ingestion collaborator emits today; it is confined to
//! this module so a structured signal can replace it without touching the
//! orchestrator.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::errors::{RetrievalError, RetrievalResult};
use crate::domain::models::IngestionConfig;
use crate::domain::ports::{ContentSource, IngestionReport};

/// Marker emitted on stdout by the ingestion script when the snapshot changed.
pub const CHANGE_SENTINEL: &str = "Articles updated - changes detected";

/// Content source that shells out to the ingestion script.
pub struct ProcessContentSource {
    config: IngestionConfig,
}

impl ProcessContentSource {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ContentSource for ProcessContentSource {
    async fn run(&self) -> RetrievalResult<IngestionReport> {
        debug!(
            command = %self.config.command,
            args = ?self.config.args,
            "Running ingestion process"
        );

        let output = Command::new(&self.config.command)
            .args(&self.config.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| {
                RetrievalError::CorpusLoad(format!(
                    "failed to spawn ingestion process '{}': {}",
                    self.config.command, err
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        for line in stdout.lines() {
            debug!(target: "ingestion", "{line}");
        }
        for line in stderr.lines() {
            warn!(target: "ingestion", "{line}");
        }

        let status = output.status.code().unwrap_or(-1);
        if !output.status.success() {
            return Err(RetrievalError::IngestionFailure { status });
        }

        Ok(IngestionReport {
            changed: stdout.contains(CHANGE_SENTINEL),
            exit_status: status,
        })
    }
}
