use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gochara_base::ParseError;
use gochara_core::{SourceError, SummaryError};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Request-level failures, rendered as `{"error": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(#[from] ParseError),

    #[error("invalid value for {name}: {value} (expected true or false)")]
    InvalidFlag { name: &'static str, value: String },

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Summary(#[from] SummaryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidFlag { .. } => StatusCode::BAD_REQUEST,
            ApiError::Source(_) | ApiError::Summary(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "insight request failed");
        } else {
            warn!(error = %self, "rejected insight request");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Startup failures.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid server config: {0}")]
    InvalidConfig(&'static str),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
