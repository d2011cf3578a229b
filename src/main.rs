//! Server binary for the overtime eligibility estimator.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use overtime_eligibility::api::{AppState, create_router};
use overtime_eligibility::config::{ConfigLoader, builtin_ruleset};
use overtime_eligibility::error::EngineResult;
use overtime_eligibility::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "overtime-eligibility",
    about = "Serve overtime eligibility estimates over HTTP",
    version
)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "OVERTIME_HOST", default_value = "127.0.0.1")]
    host: String,
    /// Port to bind the HTTP server to
    #[arg(long, env = "OVERTIME_PORT", default_value_t = 3000)]
    port: u16,
    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, env = "OVERTIME_LOG_LEVEL", default_value = "info")]
    log_level: String,
    /// YAML ruleset to use instead of the built-in one
    #[arg(long, env = "OVERTIME_RULESET")]
    ruleset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> EngineResult<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let ruleset = match &cli.ruleset {
        Some(path) => ConfigLoader::load(path)?,
        None => builtin_ruleset().clone(),
    };
    info!(
        ruleset = %ruleset.metadata().name,
        version = %ruleset.metadata().version,
        source = cli.ruleset.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "builtin".to_string()),
        "Ruleset ready"
    );

    let router = create_router(AppState::new(ruleset));
    let listener = TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
