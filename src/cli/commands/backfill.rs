use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use crate::domain::models::Config;
use crate::infrastructure::cache::VectorCache;
use crate::infrastructure::cohere::CohereClient;
use crate::infrastructure::corpus::CorpusStore;
use crate::services::{BackfillService, BatchPolicy};

pub async fn execute(config: Config, json: bool) -> Result<()> {
    let cache = Arc::new(Mutex::new(
        VectorCache::load(&config.cache.path)
            .await
            .context("Failed to load vector cache")?,
    ));

    let store = Arc::new(CorpusStore::new(&config.corpus.path));
    store
        .reload()
        .await
        .context("Failed to load corpus snapshot")?;

    let client = Arc::new(
        CohereClient::new(config.cohere.clone()).context("Failed to build Cohere client")?,
    );

    let backfill = BackfillService::new(
        client,
        store,
        cache,
        BatchPolicy::from_config(&config.backfill),
    );

    let report = backfill.run().await.context("Backfill failed")?;

    if json {
        let payload = serde_json::json!({
            "success": true,
            "total": report.total,
            "from_cache": report.from_cache,
            "embedded": report.embedded,
            "failed": report.failed,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "Backfill complete: {} articles, {} from cache, {} embedded, {} failed",
            report.total, report.from_cache, report.embedded, report.failed
        );
    }

    Ok(())
}
