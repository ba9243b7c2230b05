//! Dataset - a collection of statements
//!
//! `Dataset` uses `Vec<Statement>` to preserve duplicates (bag semantics).
//! Call `dedupe()` explicitly if you want set semantics, and `sort()` for
//! deterministic ordering before comparing or formatting.

use crate::Statement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A collection of RDF statements
///
/// Parsers record the base IRI and prefix mappings they saw so callers can
/// reconstruct compact forms; neither affects statement identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    statements: Vec<Statement>,
    /// Base IRI from parsing, if any
    pub base: Option<String>,
    /// Prefix mappings from parsing (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a statement
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Statement count (including duplicates)
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// True when the dataset holds no statements
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate the statements in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Borrow the statements
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Sort statements (subject, predicate, object, graph lexicographic)
    pub fn sort(&mut self) {
        self.statements.sort();
    }

    /// Remove duplicate statements (requires sorted input for full effect)
    pub fn dedupe(&mut self) {
        self.statements.dedup();
    }

    /// Sort and deduplicate
    pub fn canonicalize(&mut self) {
        self.sort();
        self.dedupe();
    }
}

impl FromIterator<Statement> for Dataset {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().collect(),
            base: None,
            prefixes: BTreeMap::new(),
        }
    }
}

impl IntoIterator for Dataset {
    type Item = Statement;
    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}
