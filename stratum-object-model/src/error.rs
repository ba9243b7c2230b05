//! Error types for object-model resolution

use stratum_model::StoreError;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Resolver error type
///
/// Resolution is all-or-nothing: any failure aborts the whole schema,
/// since downstream generators cannot emit schemas with holes.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Expected resource absent from the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resolved reference lacks the expected role tag
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResolveError {
    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        ResolveError::NotFound(msg.into())
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        ResolveError::TypeMismatch(msg.into())
    }
}
