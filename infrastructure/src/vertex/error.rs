//! Error types for the Vertex AI adapter

use thiserror::Error;

/// Result type alias for Vertex AI operations
pub type Result<T> = std::result::Result<T, VertexError>;

/// Errors that can occur when communicating with Vertex AI
#[derive(Error, Debug)]
pub enum VertexError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to run gcloud: {0}")]
    SpawnError(#[from] std::io::Error),

    #[error("Failed to acquire access token: {0}")]
    AuthError(String),
}
