//! AlgoForge server entry point
//!
//! Builds the catalog and registry once, then serves the benchmark endpoint.

use algoforge::core::config::EngineConfig;
use algoforge::core::error::{ForgeError, Result};
use algoforge::server::{serve, AppState};
use clap::Parser;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "algoforge", about = "Natural-language benchmark dispatcher")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: String,

    /// Minimum edit similarity for fuzzy keyword matching (0.0 - 1.0)
    #[arg(long, default_value_t = 0.75)]
    fuzzy_threshold: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("algoforge=debug")
        .init();

    let args = Args::parse();

    let config = EngineConfig {
        fuzzy_threshold: args.fuzzy_threshold,
    };
    config.validate().map_err(ForgeError::Config)?;

    tracing::info!("AlgoForge starting...");
    let state = Arc::new(AppState::standard(config));
    serve(&args.addr, state).await
}
