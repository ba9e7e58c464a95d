use anyhow::{bail, Context, Result};

use crate::api;
use crate::application::AppContext;
use crate::domain::models::Config;

pub async fn execute(config: Config, json: bool) -> Result<()> {
    let ctx = AppContext::initialize(config)
        .await
        .context("Failed to initialize application context")?;

    let response = api::sync(&ctx).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if let Some(message) = &response.message {
        println!("Sync complete: {message}");
    }

    if !response.success {
        bail!(response
            .error
            .unwrap_or_else(|| "sync failed".to_string()));
    }

    Ok(())
}
