//! Pull-based RDF graph access for the Stratum model compiler
//!
//! A [`GraphSource`] answers `property` and `reverse_property` lookups over
//! an RDF graph; a [`BoundNode`] binds one subject to a source and exposes
//! the typed accessors entity adapters read through, including RDF
//! Collection expansion.
//!
//! # Backends
//!
//! - [`MemoryGraphSource`] - linear filter over a parsed statement list
//! - [`SparqlGraphSource`] - one CONSTRUCT query per call against a remote
//!   endpoint
//! - [`FederatedGraphSource`] - composition of sources under a first-match
//!   or exhaustive policy
//!
//! # Example
//!
//! ```
//! use stratum_graph_source::{BoundNode, MemoryGraphSource};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = MemoryGraphSource::from_turtle(
//!     "@prefix ex: <http://example.org/> .\n\
//!      ex:alice a ex:Person ; ex:name \"Alice\" .",
//! ).unwrap();
//!
//! let node = BoundNode::iri(&source, "http://example.org/alice");
//! let types = node.types().await.unwrap();
//! assert_eq!(types, vec!["http://example.org/Person".to_string()]);
//! # });
//! ```

mod bound;
mod config;
mod error;
mod federated;
mod memory;
mod source;
mod sparql;

pub use bound::BoundNode;
pub use config::SparqlSourceConfig;
pub use error::{GraphSourceError, Result};
pub use federated::{FederatedGraphSource, FederationPolicy};
pub use memory::MemoryGraphSource;
pub use source::GraphSource;
pub use sparql::SparqlGraphSource;
