//! Federated graph source - composition of several backends

use crate::error::Result;
use crate::source::GraphSource;
use async_trait::async_trait;
use std::sync::Arc;
use stratum_graph_ir::Term;

/// How a federation combines its backends' answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FederationPolicy {
    /// Stop at the first backend returning a non-empty list
    #[default]
    FirstMatch,
    /// Query every backend and concatenate results in backend order
    Exhaustive,
}

/// Graph source composing several backends under one policy
///
/// Backends are consulted strictly in registration order, one at a time -
/// no concurrent fan-out.
#[derive(Debug, Clone)]
pub struct FederatedGraphSource {
    sources: Vec<Arc<dyn GraphSource>>,
    policy: FederationPolicy,
}

impl FederatedGraphSource {
    /// Create a federation with the given policy
    pub fn new(sources: Vec<Arc<dyn GraphSource>>, policy: FederationPolicy) -> Self {
        Self { sources, policy }
    }

    /// Create a first-match federation
    pub fn first_match(sources: Vec<Arc<dyn GraphSource>>) -> Self {
        Self::new(sources, FederationPolicy::FirstMatch)
    }

    /// Create an exhaustive federation
    pub fn exhaustive(sources: Vec<Arc<dyn GraphSource>>) -> Self {
        Self::new(sources, FederationPolicy::Exhaustive)
    }

    /// The active policy
    pub fn policy(&self) -> FederationPolicy {
        self.policy
    }
}

#[async_trait]
impl GraphSource for FederatedGraphSource {
    async fn property(&self, subject: &Term, predicate: &str) -> Result<Vec<Term>> {
        let mut merged = Vec::new();
        for source in &self.sources {
            let mut terms = source.property(subject, predicate).await?;
            match self.policy {
                FederationPolicy::FirstMatch => {
                    if !terms.is_empty() {
                        return Ok(terms);
                    }
                }
                FederationPolicy::Exhaustive => merged.append(&mut terms),
            }
        }
        Ok(merged)
    }

    async fn reverse_property(&self, predicate: &str, object: &Term) -> Result<Vec<Term>> {
        let mut merged = Vec::new();
        for source in &self.sources {
            let mut terms = source.reverse_property(predicate, object).await?;
            match self.policy {
                FederationPolicy::FirstMatch => {
                    if !terms.is_empty() {
                        return Ok(terms);
                    }
                }
                FederationPolicy::Exhaustive => merged.append(&mut terms),
            }
        }
        Ok(merged)
    }
}
