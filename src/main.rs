use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use punch_timesheet::api::{AppState, create_router};
use punch_timesheet::config::ConfigLoader;

/// Serve punch table summaries over HTTP.
#[derive(Debug, Parser)]
#[command(name = "punch-timesheet", version, about)]
struct Cli {
    /// Configuration directory holding profile.yaml and columns.yaml.
    /// The built-in header aliases are used when omitted.
    #[arg(long, env = "PUNCH_TIMESHEET_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, env = "PUNCH_TIMESHEET_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::builtin(),
    };
    tracing::info!(
        profile = %loader.profile().name,
        profile_version = %loader.profile().version,
        "Punch timesheet v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(address = %cli.bind, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received; shutting down");
            }
        })
        .await?;

    Ok(())
}
