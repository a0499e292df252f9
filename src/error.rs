//! Error types for the scour front-end.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Top-level error type for configuration, sessions and the web layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the search core.
    #[error("search error: {0}")]
    Search(#[from] scour_search::SearchError),

    /// The client sent something unusable. The message is shown verbatim.
    #[error("{0}")]
    BadRequest(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}
