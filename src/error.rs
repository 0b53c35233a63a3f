use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{api} returned status {status}")]
    Status { api: &'static str, status: u16 },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response body did not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// The HTTP status behind this failure, when there is one. Transport
    /// breakdowns and undecodable bodies have none.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum MusicError {
    #[error("upstream rejected the request: {0}")]
    BadRequest(UpstreamError),
    #[error("failed to serialize payload for caching: {0}")]
    Cache(#[from] serde_json::Error),
}

impl IntoResponse for MusicError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Cache(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}
