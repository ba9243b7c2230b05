//! The GraphSource trait - pull API over an RDF graph
//!
//! A graph source answers exactly two questions: the objects of
//! `(subject, predicate, ?)` and the subjects of `(?, predicate, object)`.
//! Backends decide where the answers come from (an in-memory statement
//! list, a remote SPARQL endpoint, or a federation of sources).

use crate::error::Result;
use async_trait::async_trait;
use std::fmt::Debug;
use stratum_graph_ir::Term;

/// Pull-based access to an RDF graph
///
/// # Contract
///
/// Both methods return an **ordered** term list and an empty list when
/// nothing matches - absence is never an error. Every call is a suspension
/// point; callers await each result before issuing the next call.
#[async_trait]
pub trait GraphSource: Debug + Send + Sync {
    /// All object terms of statements matching `(subject, predicate, ?)`
    async fn property(&self, subject: &Term, predicate: &str) -> Result<Vec<Term>>;

    /// All subject terms of statements matching `(?, predicate, object)`
    async fn reverse_property(&self, predicate: &str, object: &Term) -> Result<Vec<Term>>;
}
