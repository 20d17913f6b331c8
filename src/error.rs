//! Core Error Taxonomy
//!
//! Three recoverable conditions cross the service boundary:
//! - `ServiceUnavailable`: no trained artifact loaded, permanent until restart
//! - `InvalidInput`: missing/unparseable request fields
//! - `Internal`: unexpected orchestration fault, caught and reported
//!
//! Nothing here propagates as a panic; the external layer maps the variants
//! to HTTP statuses via [`CoreError::status_hint`].

use thiserror::Error;

use crate::model::{ArtifactError, InferenceError};

/// Error surface of the three public services.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No trained classifier is loaded. Permanent for the process lifetime.
    #[error("classification model unavailable: {0}")]
    ServiceUnavailable(String),

    /// Missing required field, unparseable number/date, or bad request shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected internal fault, caught at the service boundary.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// HTTP status the external layer should report for this condition.
    pub fn status_hint(&self) -> u16 {
        match self {
            CoreError::ServiceUnavailable(_) => 503,
            CoreError::InvalidInput(_) => 400,
            CoreError::Internal(_) => 500,
        }
    }
}

impl From<InferenceError> for CoreError {
    fn from(e: InferenceError) -> Self {
        CoreError::Internal(e.to_string())
    }
}

impl From<ArtifactError> for CoreError {
    fn from(e: ArtifactError) -> Self {
        CoreError::Internal(e.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
