//! Error responses for the relay

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

/// Failures talking to the auxiliary service. An upstream 404 stays a
/// 404 so not-found parameters remain visible to clients; everything
/// else is a bad gateway.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("auxiliary service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("auxiliary service returned {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("malformed auxiliary service response: {0}")]
    Malformed(#[source] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::UpstreamStatus { status, .. } if *status == StatusCode::NOT_FOUND => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
