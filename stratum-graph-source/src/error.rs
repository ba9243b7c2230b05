//! Error types for graph source access

use stratum_graph_turtle::TurtleError;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, GraphSourceError>;

/// Graph source error type
///
/// Absence of data is never an error: `property`/`reverse_property` return
/// empty lists for unknown subjects. Errors signal malformed graph
/// structure or a failing backend.
#[derive(Error, Debug)]
pub enum GraphSourceError {
    /// Malformed graph structure (bad RDF Collection, wrong arity)
    #[error("Structural error: {0}")]
    Structural(String),

    /// Opaque backend fetch/query failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Unreadable textual query response
    #[error("Response parse error: {0}")]
    Parse(#[from] TurtleError),
}

impl GraphSourceError {
    /// Create a structural error
    pub fn structural(msg: impl Into<String>) -> Self {
        GraphSourceError::Structural(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        GraphSourceError::Transport(msg.into())
    }
}
