//! In-memory graph source backed by a statement list

use crate::error::Result;
use crate::source::GraphSource;
use async_trait::async_trait;
use stratum_graph_ir::{Dataset, Term};
use stratum_graph_turtle::parse_to_dataset;

/// Graph source over an in-memory [`Dataset`]
///
/// Lookups are linear filters over the statement list, preserving statement
/// order. Graph components are ignored: the source exposes the union of all
/// graphs in the dataset.
#[derive(Debug, Clone)]
pub struct MemoryGraphSource {
    dataset: Dataset,
}

impl MemoryGraphSource {
    /// Create a source over an existing dataset
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Parse Turtle/TriG/N-Quads text into a source
    pub fn from_turtle(input: &str) -> stratum_graph_turtle::Result<Self> {
        Ok(Self::new(parse_to_dataset(input)?))
    }

    /// Number of statements held
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// True when the source holds no statements
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}

#[async_trait]
impl GraphSource for MemoryGraphSource {
    async fn property(&self, subject: &Term, predicate: &str) -> Result<Vec<Term>> {
        Ok(self
            .dataset
            .iter()
            .filter(|st| st.subject() == subject && st.predicate_iri() == predicate)
            .map(|st| st.object().clone())
            .collect())
    }

    async fn reverse_property(&self, predicate: &str, object: &Term) -> Result<Vec<Term>> {
        Ok(self
            .dataset
            .iter()
            .filter(|st| st.predicate_iri() == predicate && st.object() == object)
            .map(|st| st.subject().clone())
            .collect())
    }
}
