//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown research depth: {0}")]
    UnknownDepth(String),

    #[error("Unknown analysis focus: {0}")]
    UnknownFocus(String),
}
