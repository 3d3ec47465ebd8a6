//! REST API surface.

pub mod handlers;

use axum::routing::{get, post};
use axum::Router;

/// Builds the gateway router.
pub fn create_router() -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/sample-portfolio", get(handlers::sample_portfolio))
        .route("/api/v1/risk", post(handlers::calculate_risk))
}
