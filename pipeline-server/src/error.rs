//! HTTP error mapping. Every error renders as `{"detail": "..."}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pipeline_validator::ValidationError;

/// Message returned for any unexpected failure; internals never reach the client.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Body is not JSON or does not match the pipeline schema.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("request body too large")]
    PayloadTooLarge,
    /// Body stream failed before it was fully read (e.g. client disconnect).
    #[error("failed to read request body: {0}")]
    UnreadableBody(String),
    #[error("internal error")]
    Internal,
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidBody(rejection) => rejection.status(),
            ServerError::Validation(ValidationError::NoNodes) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::UnreadableBody(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            ServerError::InvalidBody(rejection) => rejection.body_text(),
            ServerError::Internal => INTERNAL_ERROR_DETAIL.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }
        (status, Json(serde_json::json!({ "detail": self.detail() }))).into_response()
    }
}
