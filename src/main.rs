//! Life Goals Tracker - Main Entry Point
//!
//! Parses the command line, loads configuration and serves the goal
//! tracker page. The actual implementation is in the `life_goals` library.

use anyhow::{Context, Result};
use clap::Parser;
use life_goals::{Config, ConfigOverrides, GoalFormat, GoalServer, router};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Life Goals - track life goals by category on a local web page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the goal list file
    #[arg(long)]
    goals_file: Option<PathBuf>,

    /// Path to the JSON metadata file
    #[arg(long)]
    metadata_file: Option<PathBuf>,

    /// Listen address (ip:port)
    #[arg(long)]
    listen: Option<String>,

    /// Layout of the goal list file
    #[arg(long, value_enum)]
    format: Option<GoalFormat>,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        let overrides = ConfigOverrides {
            goals_file: self.goals_file,
            metadata_file: self.metadata_file,
            listen: self.listen,
            format: self.format,
        };
        Config::resolve(self.config.as_deref(), overrides)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "life_goals=info,tower_http=info".into()),
        )
        .init();

    let config = Args::parse().into_config()?;
    let server = Arc::new(GoalServer::from_config(&config));
    let app = router(server);

    let listener = tokio::net::TcpListener::bind(config.listen.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    tracing::info!(
        listen = %config.listen,
        goals_file = %config.goals_file.display(),
        metadata_file = %config.metadata_file.display(),
        "serving life goals"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
