//! Error types for the resource store layer

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, StoreError>;

/// Resource store error type
///
/// Absence of a resource is not an error - `read_resource` returns
/// `Ok(None)`. Errors signal a failing backing implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Opaque backing storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        StoreError::Storage(msg.into())
    }
}
