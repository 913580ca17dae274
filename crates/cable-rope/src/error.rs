//! Error types for rope construction.

use thiserror::Error;

/// Errors that can occur while building a rope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RopeError {
    /// Segment count, cable length, or iteration counts are out of range.
    #[error("invalid rope configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for rope operations.
pub type RopeResult<T> = Result<T, RopeError>;
