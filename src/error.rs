//! Crate Error Type
//!
//! The error taxonomy is deliberately minimal. The builders in this crate
//! either succeed and return a fully valid matrix, or fail fast on malformed
//! input before any computation begins. Failures raised by the external
//! collaborators (shortest-path solver, persistence engine) are surfaced to
//! the caller unmodified, wrapped as `DownstreamComputation`.

use thiserror::Error;

/// Errors produced by the surface/grid builders and the metric hand-off
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input (non-positive grid dimensions, negative jitter,
    /// adjacency matrix violating the symmetric/zero-diagonal contract)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An external computation (shortest paths, persistence) failed;
    /// the underlying cause is preserved untouched
    #[error("downstream computation failed: {0}")]
    DownstreamComputation(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a failure from an external collaborator
    pub fn downstream<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DownstreamComputation(Box::new(err))
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
