//! bureau-cms - page content service for the marketing site
//!
//! Serves stored overrides, default-backed page rendering and editor
//! sessions over HTTP.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use bureau_common::config::{CompiledDefaults, RootFolderInitializer, RootFolderResolver, TomlConfig};
use bureau_common::db::init_database;
use bureau_cms::{build_router, AppState};
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const MODULE_NAME: &str = "bureau-cms";

/// How often idle editor sessions are swept
const SESSION_SWEEP_PERIOD: Duration = Duration::from_secs(60);

/// Command-line arguments for bureau-cms
#[derive(Parser, Debug)]
#[command(name = "bureau-cms")]
#[command(about = "Page content service for the marketing site")]
#[command(version)]
struct Args {
    /// Root folder holding the content database
    #[arg(short, long, env = "BUREAU_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, env = "BUREAU_CMS_BIND")]
    bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "BUREAU_CMS_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = TomlConfig::load_or_default(MODULE_NAME);
    let defaults = CompiledDefaults::for_current_platform();

    init_tracing(&config.logging.level, config.logging.file.as_deref())?;

    info!(
        "Starting bureau-cms v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let root_folder = RootFolderResolver::new(MODULE_NAME)
        .with_cli_arg(args.root_folder)
        .with_toml(config.clone())
        .resolve();

    let initializer = RootFolderInitializer::new(root_folder);
    initializer.ensure_directory_exists()?;
    info!("Root folder: {}", initializer.root_folder().display());

    let db_path = initializer.database_path();
    if !initializer.database_exists() {
        info!("Creating content database: {}", db_path.display());
    }

    let pool = match init_database(&db_path).await {
        Ok(pool) => {
            info!("Connected to content database: {}", db_path.display());
            pool
        }
        Err(e) => {
            error!("Failed to open content database: {}", e);
            return Err(e.into());
        }
    };

    let idle_timeout = config
        .session_idle_secs
        .map(Duration::from_secs)
        .unwrap_or(defaults.session_idle_timeout);
    let state = AppState::with_session_timeout(pool, idle_timeout);
    info!(
        "Editor sessions expire after {}s idle",
        state.sessions.idle_timeout().as_secs()
    );
    let _sweeper = state.sessions.spawn_sweeper(SESSION_SWEEP_PERIOD);

    let app = build_router(state);

    let bind = args
        .bind
        .or(config.bind_address)
        .unwrap_or(defaults.bind_address);
    let port = args.port.or(config.port).unwrap_or(defaults.port);
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", bind, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("bureau-cms listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
fn init_tracing(level: &str, file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", level)));

    match file {
        Some(path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
