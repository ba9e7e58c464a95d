//! Oraculum CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use oraculum::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();

    let config = match cli::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => cli::handle_error(err, args.json),
    };

    let result = match args.command {
        Commands::Search(search_args) => {
            cli::commands::search::execute(search_args, config, args.json).await
        }
        Commands::Sync => cli::commands::sync::execute(config, args.json).await,
        Commands::Backfill => cli::commands::backfill::execute(config, args.json).await,
        Commands::Status => cli::commands::status::execute(config, args.json).await,
    };

    if let Err(err) = result {
        cli::handle_error(err, args.json);
    }
}
