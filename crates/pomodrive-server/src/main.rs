//! Pomodrive Server - local HTTP mirror of the Pomodoro timer
//!
//! Loads the stored records, starts the 1 Hz pulse and serves the API until
//! SIGINT or SIGTERM.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use pomodrive_core::{App, Config, Database};
use tokio::net::TcpListener;
use tracing::info;

use pomodrive_server::{create_router, pulse_task, ServerState, PULSE_PERIOD};

#[derive(Parser)]
#[command(name = "pomodrive-server")]
#[command(about = "Local HTTP mirror of the Pomodrive timer")]
#[command(version)]
struct Args {
    /// Port to bind to (defaults to `server.port` in config.toml)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host address to bind to (defaults to `server.host` in config.toml)
    #[arg(long)]
    host: Option<String>,

    /// Database file (defaults to `<data dir>/pomodrive.db`)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "pomodrive_server={0},pomodrive_core={0},tower_http=info",
            args.log_level()
        ))
        .init();

    let mut server = Config::load_or_default().server;
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let db = match &args.db {
        Some(path) => Database::open_at(path)?,
        None => Database::open()?,
    };
    let state = Arc::new(ServerState::new(App::open(db)?));

    let pulse_state = Arc::clone(&state);
    tokio::spawn(async move {
        pulse_task(pulse_state, PULSE_PERIOD).await;
    });

    let router = create_router(state);
    let addr = server.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("  POST /api/start  - Start the timer ({{\"continuous\": true}} to chain phases)");
    info!("  POST /api/pause  - Pause the timer");
    info!("  GET  /api/status - Phase, seconds left, running flag, cycle");
    info!("  GET  /health     - Health check");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("Shutdown signal received");
}
