//! Hello Gateway HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use infrastructure::{AppConfig, init_logging};
use presentation_http::{AppState, routes};
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

const DEFAULT_LOG_FILTER: &str = "hello_gateway=debug,presentation_http=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging, the log format lives in it
    let config = AppConfig::load()?;

    init_logging(config.server.log_format, DEFAULT_LOG_FILTER)?;

    info!("👋 Hello Gateway v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        log_format = %config.server.log_format,
        "Configuration loaded"
    );

    if config.security.uses_default_token() {
        warn!(
            "Using the built-in bearer token; set HELLO_GATEWAY_SECURITY__BEARER_TOKEN to replace it"
        );
    }

    let state = AppState::from_config(&config)?;
    let app = routes::create_router(state);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs: http://{}{}", addr, routes::api_path(routes::SWAGGER_UI_ROUTE));

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let shutdown_started = Arc::new(Notify::new());

    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let shutdown_started = Arc::clone(&shutdown_started);
            async move {
                shutdown_signal().await;
                info!("⏳ Waiting up to {:?} for connections to close...", shutdown_timeout);
                shutdown_started.notify_one();
            }
        })
        .into_future();

    tokio::select! {
        result = server => result?,
        () = async {
            shutdown_started.notified().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!("Graceful shutdown timed out, dropping remaining connections");
        }
    }

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
