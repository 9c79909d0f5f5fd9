//! Error Taxonomy
//!
//! Typed errors surfaced by the core modules, and their translation into HTTP
//! responses. The stores never recover from these locally; they propagate to
//! the handler layer, which converts them here into a status code and a JSON
//! `{"error": "..."}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown version, book, chapter, or record key.
    #[error("{0}")]
    NotFound(String),

    /// Backing resource present but undecodable or unparsable.
    #[error("{0}")]
    CorruptData(String),

    /// Malformed or missing request parameter.
    #[error("{0}")]
    InvalidArgument(String),

    /// Missing or invalid bearer token.
    #[error("{0}")]
    Unauthorized(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::CorruptData(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
