use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reelscout_core::{
    load_config, open_store, validate_config, KeyValueStore, MovieApp, MovieCatalog, Presenter,
    TmdbClient,
};
use reelscout_server::api::{create_router, WsBroadcaster};
use reelscout_server::presenter::ViewPresenter;
use reelscout_server::state::AppState;

/// Interval between WebSocket heartbeats
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_logging();

    // Determine config path
    let config_path = std::env::var("REELSCOUT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Storage backend: {:?}", config.storage.backend);

    let store: Arc<dyn KeyValueStore> =
        open_store(&config.storage).context("Failed to open storage")?;
    info!("Storage opened");

    let catalog: Arc<dyn MovieCatalog> = Arc::new(
        TmdbClient::new(config.catalog.tmdb()).context("Failed to create TMDB client")?,
    );
    info!("TMDB client initialized");

    let view = Arc::new(ViewPresenter::new(WsBroadcaster::default()));
    let app = Arc::new(MovieApp::new(
        catalog,
        store,
        Arc::clone(&view) as Arc<dyn Presenter>,
    ));

    // Paint the start page in the background; clients pick it up over /ws or /view
    let startup_app = Arc::clone(&app);
    tokio::spawn(async move {
        startup_app.initialize().await;
    });

    let heartbeat_broadcaster = view.broadcaster().clone();
    let heartbeat_handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(HEARTBEAT_INTERVAL);
        loop {
            interval.tick().await;
            heartbeat_broadcaster.heartbeat();
        }
    });

    let state = Arc::new(AppState::new(config.clone(), app, view));
    let router = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    heartbeat_handle.abort();
    info!("Server shut down");

    Ok(())
}

/// Install the tracing subscriber; `LOG_FORMAT=json` switches to JSON lines.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
