//! Error types for adapters and the graph loader

use stratum_graph_source::GraphSourceError;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Loader error type
///
/// Adapters and the loader fail fast: a structural or transport error
/// aborts the whole load, never producing a partial store.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Malformed model structure (wrong arity, bad literal form)
    #[error("Structural error: {0}")]
    Structural(String),

    /// Underlying graph source failure
    #[error(transparent)]
    Source(#[from] GraphSourceError),

    /// IRI mapping failure (reverse mapping without the expected prefix)
    #[error("IRI mapping error: {0}")]
    IriMapping(String),
}

impl LoaderError {
    /// Create a structural error
    pub fn structural(msg: impl Into<String>) -> Self {
        LoaderError::Structural(msg.into())
    }

    /// Create an IRI mapping error
    pub fn iri_mapping(msg: impl Into<String>) -> Self {
        LoaderError::IriMapping(msg.into())
    }
}
