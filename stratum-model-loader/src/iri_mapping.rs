//! IRI mapping between the CIM and PIM spaces
//!
//! CIM entities live under foreign IRIs; the PIM resources specializing
//! them live under local IRIs. CIM-facing adapters translate between the
//! two through an injected mapping provider.

use crate::error::{LoaderError, Result};
use std::fmt::Debug;

/// Bidirectional mapping between CIM and PIM IRI spaces
pub trait IriMapping: Debug + Send + Sync {
    /// Translate a foreign CIM IRI to its local PIM IRI (total)
    fn cim_to_pim(&self, cim_iri: &str) -> String;

    /// Translate a local PIM IRI back to its CIM IRI
    ///
    /// Fails when the IRI does not belong to the mapped space.
    fn pim_to_cim(&self, pim_iri: &str) -> Result<String>;
}

/// Mapping that prefixes/strips a fixed literal prefix
#[derive(Debug, Clone)]
pub struct PrefixIriMapping {
    prefix: String,
}

impl PrefixIriMapping {
    /// Create a mapping using the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl IriMapping for PrefixIriMapping {
    fn cim_to_pim(&self, cim_iri: &str) -> String {
        format!("{}{}", self.prefix, cim_iri)
    }

    fn pim_to_cim(&self, pim_iri: &str) -> Result<String> {
        pim_iri
            .strip_prefix(self.prefix.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                LoaderError::iri_mapping(format!(
                    "'{}' does not start with the mapping prefix '{}'",
                    pim_iri, self.prefix
                ))
            })
    }
}

/// Identity mapping, for graphs already living in local IRI space
#[derive(Debug, Clone, Default)]
pub struct IdentityIriMapping;

impl IriMapping for IdentityIriMapping {
    fn cim_to_pim(&self, cim_iri: &str) -> String {
        cim_iri.to_string()
    }

    fn pim_to_cim(&self, pim_iri: &str) -> Result<String> {
        Ok(pim_iri.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_round_trip() {
        let mapping = PrefixIriMapping::new("https://model.example.org/pim#");
        let pim = mapping.cim_to_pim("http://cim.example.org/Person");
        assert_eq!(
            pim,
            "https://model.example.org/pim#http://cim.example.org/Person"
        );
        assert_eq!(
            mapping.pim_to_cim(&pim).unwrap(),
            "http://cim.example.org/Person"
        );
    }

    #[test]
    fn test_reverse_without_prefix_fails() {
        let mapping = PrefixIriMapping::new("https://model.example.org/pim#");
        let err = mapping.pim_to_cim("http://elsewhere.org/x").unwrap_err();
        assert!(matches!(err, LoaderError::IriMapping(_)));
    }

    #[test]
    fn test_identity() {
        let mapping = IdentityIriMapping;
        assert_eq!(mapping.cim_to_pim("http://e/x"), "http://e/x");
        assert_eq!(mapping.pim_to_cim("http://e/x").unwrap(), "http://e/x");
    }
}
