//! HTTP server initialization and runtime setup.
//!
//! Wires the order store into the router and runs the Axum server until a
//! shutdown signal arrives.

use crate::application::services::OrderService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryOrderRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory order repository
/// - Order service over the configured identifier range
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The identifier range is invalid
/// - The listen address cannot be parsed or bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let id_range = config.id_range()?;

    let repository = Arc::new(InMemoryOrderRepository::new());
    let order_service = Arc::new(OrderService::new(
        repository,
        id_range,
        config.update_mode,
    ));
    tracing::info!(
        capacity = order_service.capacity(),
        "Order store ready (in-memory)"
    );

    let state = AppState::new(order_service, config.listen_addr.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
