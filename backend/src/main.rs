//! Main entry point for the NexusHub backend.
//!
//! This file parses the command line, loads configuration, initializes
//! logging and serves the application router.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nexushub_backend::config::{Config, ENV_CONFIG_PATH};
use nexushub_backend::{build_router, logging, AppState};

#[derive(Debug, Parser)]
#[command(name = "nexushub", about = "NexusHub webinar platform backend")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, env = ENV_CONFIG_PATH)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    logging::init_logging(&config.logging).context("initialising logging")?;

    let addr = config.listen_addr()?;
    let app = build_router(AppState::seeded(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
