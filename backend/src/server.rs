use std::sync::Arc;

use axum::Extension;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{gallery::Gallery, routes};

/// Builds the router with its dependencies attached
pub fn router(gallery: Arc<Gallery>) -> axum::Router {
    routes::handler()
        .layer(Extension(gallery))
        // Request spans for every handler
        .layer(TraceLayer::new_for_http())
}

/// Starts the server on `port` with the given gallery
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(port: u16, gallery: Arc<Gallery>) -> anyhow::Result<()> {
    let router = router(gallery);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 Gallery started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
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
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down Gallery...");
}
