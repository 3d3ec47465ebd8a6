//! Gateway error handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use risk_mc::EngineError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the REST layer.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request failed the gateway's validation tier.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The engine rejected the inputs at construction time.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Wire shape for error responses.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    detail: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::InvalidRequest(_) | ServerError::Engine(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: format!("HTTP {}", status.as_u16()),
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
