//! Tube mesh error types.

use thiserror::Error;

/// Errors that can occur while generating a tube mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Too few centerline points, too few sides, or a bad radius.
    #[error("invalid tube input: {0}")]
    InvalidInput(String),
}

/// Result type for tube mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
