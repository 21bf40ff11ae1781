mod delete;
mod health;
mod index;

use axum::{
    routing::{any, get},
    Router,
};

/// Creates the router with all handler routes
///
/// Paths without a route of their own fall through to the gallery page.
pub fn handler() -> Router {
    Router::new()
        .route("/", any(index::handler))
        .route("/delete", any(delete::handler))
        .route("/health", get(health::handler))
        .fallback(index::handler)
}
