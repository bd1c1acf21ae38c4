use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use browser_adapter::ChromiumPort;
use capture_session::{CaptureSession, NoopObserver};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use capturekit_cli::config::AppConfig;
use capturekit_cli::server::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(
    name = "capturekit",
    about = "Record page interactions and synthesize element locators over HTTP",
    version
)]
struct Cli {
    /// Bind address for the HTTP server.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Listen port; falls back to $PORT, then 9999.
    #[arg(long)]
    port: Option<u16>,

    /// Chromium executable to launch instead of the auto-detected one.
    #[arg(long, env = "CAPTUREKIT_CHROME")]
    chrome_path: Option<PathBuf>,

    /// Browser profile directory.
    #[arg(long)]
    user_data_dir: Option<PathBuf>,

    /// Run the browser with a visible window.
    #[arg(long)]
    headful: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = AppConfig::resolve(
        &cli.host,
        cli.port,
        cli.chrome_path,
        cli.user_data_dir,
        cli.headful,
    )?;

    let session = Arc::new(CaptureSession::new(
        Arc::new(ChromiumPort::new()),
        Arc::new(NoopObserver),
        config.adapter.clone(),
    ));
    let app = build_router(AppState::new(session));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(target: "capturekit", "server running on http://{addr}");

    axum::serve(listener, app)
        .await
        .context("http server terminated")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
