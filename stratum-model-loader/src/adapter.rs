//! The EntityAdapter trait and shared adapter helpers
//!
//! One adapter per role. Adapters are type-tag-gated: on a node whose
//! `rdf:type` set does not match, an adapter writes nothing and reports
//! nothing. A resource may be touched by several adapters in one visit -
//! roles compose.

use crate::error::{LoaderError, Result};
use async_trait::async_trait;
use std::fmt::Debug;
use stratum_graph_source::BoundNode;
use stratum_model::Resource;

/// Populates one role of a resource from a bound graph view
#[async_trait]
pub trait EntityAdapter: Debug + Send + Sync {
    /// Load role fields from the view into the resource
    ///
    /// Returns every IRI the adapter just referenced, so the loader can
    /// expand its frontier. Must be side-effect-free on non-matching
    /// input: no field writes, an empty list back.
    async fn load(&self, node: &BoundNode<'_>, resource: &mut Resource) -> Result<Vec<String>>;
}

/// Check whether a node's types contain the given role-tag IRI
pub(crate) fn accepts(types: &[String], tag_iri: &str) -> bool {
    types.iter().any(|t| t == tag_iri)
}

/// Push a value unless already present (set-union merge on a Vec)
pub(crate) fn merge_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Parse a boolean literal term
pub(crate) fn boolean_lexical(term: &stratum_graph_ir::Term) -> bool {
    matches!(term.as_literal(), Some((lexical, _, _)) if lexical == "true" || lexical == "1")
}

/// Parse a non-negative integer literal term, naming the subject on failure
pub(crate) fn integer_lexical(term: &stratum_graph_ir::Term, subject: &str) -> Result<u32> {
    let Some((lexical, _, _)) = term.as_literal() else {
        return Err(LoaderError::structural(format!(
            "expected an integer literal on {}, got {}",
            subject, term
        )));
    };
    lexical.parse::<u32>().map_err(|_| {
        LoaderError::structural(format!(
            "invalid cardinality literal '{}' on {}",
            lexical, subject
        ))
    })
}
