use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::api::{self, SearchRequest};
use crate::application::AppContext;
use crate::domain::models::{Config, ScoredArticle};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text question to search the knowledge base with
    pub query: String,

    /// Maximum number of articles to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub async fn execute(args: SearchArgs, mut config: Config, json: bool) -> Result<()> {
    if let Some(limit) = args.limit {
        config.retrieval.limit = limit;
    }

    let ctx = AppContext::initialize(config)
        .await
        .context("Failed to initialize application context")?;

    let response = api::search(&ctx, SearchRequest { query: args.query }).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        if !response.success {
            bail!("search failed");
        }
        return Ok(());
    }

    if !response.success {
        bail!(response
            .error
            .unwrap_or_else(|| "search failed".to_string()));
    }

    let articles = response.data.unwrap_or_default();
    if articles.is_empty() {
        println!("No matching articles found.");
        return Ok(());
    }

    println!("{}", format_results_table(&articles));
    println!(
        "\nShowing {} article{}",
        articles.len(),
        if articles.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

fn format_results_table(articles: &[ScoredArticle]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Title",
        "Link",
        "Similarity",
        "Relevance",
        "Confidence",
    ]);

    for scored in articles {
        table.add_row(vec![
            Cell::new(&scored.article.title),
            Cell::new(&scored.article.link),
            Cell::new(&scored.scores.embedding_similarity),
            Cell::new(scored.scores.relevance_score.as_deref().unwrap_or("-")),
            Cell::new(
                scored
                    .scores
                    .confidence
                    .map_or("-".to_string(), |c| format!("{c:?}").to_lowercase()),
            ),
        ]);
    }

    table
}
