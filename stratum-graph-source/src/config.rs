//! SPARQL backend configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::SparqlGraphSource`].
///
/// Typically embedded in a data-specification project configuration to
/// point one vocabulary level at a remote endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparqlSourceConfig {
    /// SPARQL endpoint URL.
    pub endpoint: String,

    /// Authentication token (optional, sent as a bearer token).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Connection timeout in milliseconds (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_ms: Option<u64>,

    /// Request timeout in milliseconds (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
}

impl SparqlSourceConfig {
    /// Create a configuration for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            auth_token: None,
            connect_timeout_ms: None,
            request_timeout_ms: None,
        }
    }

    /// Set the authentication token.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the connection timeout.
    pub fn with_connect_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.connect_timeout_ms = Some(timeout_ms);
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = Some(timeout_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = SparqlSourceConfig::new("http://sparql.example.com/query")
            .with_auth_token("secret")
            .with_request_timeout_ms(10_000);

        assert_eq!(config.endpoint, "http://sparql.example.com/query");
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout_ms, Some(10_000));
        assert_eq!(config.connect_timeout_ms, None);
    }
}
