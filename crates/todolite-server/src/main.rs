//! HTTP server entry point for todolite.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use todolite_server::{AppState, ServerConfig, app};

/// JSON CRUD API over an in-memory todo list.
#[derive(Parser, Debug)]
#[command(
    name = "todolite-server",
    version,
    about = "todolite-server: JSON CRUD API over an in-memory todo list"
)]
struct Cli {
    /// Address to bind; overrides the config file.
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Directory containing todolite.toml (defaults to current).
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    install_tracing();

    let Cli { addr, config_dir } = Cli::parse();
    let config_dir = config_dir.unwrap_or_else(|| PathBuf::from("."));
    let config = ServerConfig::load(&config_dir)?;
    let addr = addr.unwrap_or(config.server.addr);

    tokio::runtime::Runtime::new()?.block_on(serve(addr))
}

async fn serve(addr: SocketAddr) -> Result<()> {
    let state = AppState::new();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn install_tracing() {
    // RUST_LOG overrides; default is INFO.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
