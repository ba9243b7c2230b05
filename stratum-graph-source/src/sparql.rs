//! Remote graph source backed by SPARQL CONSTRUCT queries
//!
//! Each `property`/`reverse_property` call builds one templated CONSTRUCT
//! query, posts it to the configured endpoint, and parses the textual
//! N-Quads/Turtle response. No caching and no retry live here; this is the
//! transport layer's job.

use crate::config::SparqlSourceConfig;
use crate::error::{GraphSourceError, Result};
use crate::source::GraphSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use stratum_graph_ir::Term;
use stratum_graph_turtle::parse_to_dataset;
use tracing::debug;

/// Graph source delegating to a remote SPARQL endpoint.
///
/// Blank nodes have no identity across an endpoint boundary, so calls with
/// a blank subject (or object) resolve to an empty list rather than a
/// query that cannot mean anything.
pub struct SparqlGraphSource {
    client: Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl SparqlGraphSource {
    /// Create a source from configuration.
    pub fn from_config(config: &SparqlSourceConfig) -> Result<Self> {
        let connect_timeout = Duration::from_millis(config.connect_timeout_ms.unwrap_or(5_000));
        let request_timeout = Duration::from_millis(config.request_timeout_ms.unwrap_or(30_000));

        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| {
                GraphSourceError::transport(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Create a source for an endpoint with default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            auth_token: None,
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a CONSTRUCT query and parse the textual response.
    async fn construct(&self, query: String) -> Result<stratum_graph_ir::Dataset> {
        debug!(endpoint = %self.endpoint, "Executing CONSTRUCT query");

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/sparql-query")
            .header("Accept", "application/n-quads")
            .body(query);

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GraphSourceError::transport(format!("query failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphSourceError::transport(format!(
                "endpoint returned {}: {}",
                status, body
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| GraphSourceError::transport(format!("failed to read response: {}", e)))?;

        Ok(parse_to_dataset(&text)?)
    }
}

impl std::fmt::Debug for SparqlGraphSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparqlGraphSource")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl GraphSource for SparqlGraphSource {
    async fn property(&self, subject: &Term, predicate: &str) -> Result<Vec<Term>> {
        let Some(subject_iri) = subject.as_iri() else {
            debug!(subject = %subject, "Blank subject has no remote identity; returning empty");
            return Ok(Vec::new());
        };

        let query = format!(
            "CONSTRUCT {{ <{s}> <{p}> ?o }} WHERE {{ <{s}> <{p}> ?o }}",
            s = subject_iri,
            p = predicate,
        );

        let dataset = self.construct(query).await?;
        Ok(dataset
            .iter()
            .filter(|st| st.subject() == subject && st.predicate_iri() == predicate)
            .map(|st| st.object().clone())
            .collect())
    }

    async fn reverse_property(&self, predicate: &str, object: &Term) -> Result<Vec<Term>> {
        if object.is_blank() {
            debug!(object = %object, "Blank object has no remote identity; returning empty");
            return Ok(Vec::new());
        }

        let query = format!(
            "CONSTRUCT {{ ?s <{p}> {o} }} WHERE {{ ?s <{p}> {o} }}",
            p = predicate,
            o = object,
        );

        let dataset = self.construct(query).await?;
        Ok(dataset
            .iter()
            .filter(|st| st.predicate_iri() == predicate && st.object() == object)
            .map(|st| st.subject().clone())
            .collect())
    }
}
