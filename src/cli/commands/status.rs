use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::models::Config;
use crate::infrastructure::cache::VectorCache;
use crate::infrastructure::corpus::CorpusStore;

pub async fn execute(config: Config, json: bool) -> Result<()> {
    let cache = VectorCache::load(&config.cache.path)
        .await
        .context("Failed to load vector cache")?;

    let store = CorpusStore::new(&config.corpus.path);
    store
        .reload()
        .await
        .context("Failed to load corpus snapshot")?;

    let snapshot = store.snapshot();
    let covered = snapshot
        .iter()
        .filter(|article| cache.get(&article.id).is_some_and(|v| !v.is_empty()))
        .count();

    // The snapshot file is rewritten on every sync, so its mtime is the
    // last time a sync landed.
    let last_synced = store.last_modified().await;

    if json {
        let payload = serde_json::json!({
            "success": true,
            "corpus_articles": snapshot.len(),
            "cached_embeddings": cache.len(),
            "covered_articles": covered,
            "last_synced_at": last_synced.map(|t| t.to_rfc3339()),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Corpus articles".to_string(), snapshot.len().to_string()]);
    table.add_row(vec!["Cached embeddings".to_string(), cache.len().to_string()]);
    table.add_row(vec![
        "Articles with a cached embedding".to_string(),
        covered.to_string(),
    ]);
    table.add_row(vec![
        "Last synced".to_string(),
        last_synced.map_or_else(|| "never".to_string(), |t| t.to_rfc3339()),
    ]);

    println!("{table}");
    Ok(())
}
