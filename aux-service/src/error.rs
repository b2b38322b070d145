//! Error responses for the auxiliary service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

/// Errors surfaced to HTTP callers. Nothing is retried locally; every
/// failure becomes a non-2xx JSON response.
#[derive(Debug, Error)]
pub enum AuxError {
    #[error("parameter not found: {0}")]
    ParameterNotFound(String),

    #[error("upstream AWS call failed: {0:#}")]
    Provider(#[from] anyhow::Error),
}

impl IntoResponse for AuxError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuxError::ParameterNotFound(_) => StatusCode::NOT_FOUND,
            AuxError::Provider(_) => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
