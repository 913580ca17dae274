//! Cable error types.

use rhizome_cable_mesh::MeshError;
use rhizome_cable_rope::RopeError;
use thiserror::Error;

/// Errors from building or rendering a cable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CableError {
    /// The rope could not be built.
    #[error(transparent)]
    Rope(#[from] RopeError),

    /// The tube could not be built.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Result type for cable operations.
pub type CableResult<T> = Result<T, CableError>;
