//! BoundNode - a graph view bound to one subject
//!
//! Entity adapters read everything through this view: typed accessors over
//! the raw `property`/`reverse_property` pull API, including RDF Collection
//! expansion for ordered lists.

use crate::error::{GraphSourceError, Result};
use crate::source::GraphSource;
use std::collections::HashSet;
use stratum_graph_ir::{LanguageString, Term};
use stratum_vocab::rdf;
use tracing::warn;

/// A [`GraphSource`] view bound to one subject term
pub struct BoundNode<'a> {
    source: &'a dyn GraphSource,
    subject: Term,
}

impl<'a> BoundNode<'a> {
    /// Bind a subject to a source
    pub fn new(source: &'a dyn GraphSource, subject: Term) -> Self {
        Self { source, subject }
    }

    /// Bind an IRI subject to a source
    pub fn iri(source: &'a dyn GraphSource, iri: impl AsRef<str>) -> Self {
        Self::new(source, Term::iri(iri))
    }

    /// The bound subject term
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// The underlying source
    pub fn source(&self) -> &'a dyn GraphSource {
        self.source
    }

    /// First node (IRI or blank) value of the predicate
    pub async fn node(&self, predicate: &str) -> Result<Option<Term>> {
        Ok(self.nodes(predicate).await?.into_iter().next())
    }

    /// All node (IRI or blank) values of the predicate
    pub async fn nodes(&self, predicate: &str) -> Result<Vec<Term>> {
        Ok(self
            .source
            .property(&self.subject, predicate)
            .await?
            .into_iter()
            .filter(Term::is_node)
            .collect())
    }

    /// All node values with RDF Collections expanded in place
    ///
    /// A value with an outgoing `rdf:first` edge is the head of an RDF
    /// Collection and is replaced by the collection's members, in list
    /// order. Every list node must carry exactly one `rdf:first` and one
    /// `rdf:rest`; anything else (including a circular `rdf:rest` chain)
    /// is a structural error naming the offending node - lists are never
    /// silently truncated.
    pub async fn nodes_extended(&self, predicate: &str) -> Result<Vec<Term>> {
        let mut result = Vec::new();

        for node in self.nodes(predicate).await? {
            let heads = self.source.property(&node, rdf::FIRST).await?;
            if heads.is_empty() {
                result.push(node);
                continue;
            }

            let mut visited: HashSet<Term> = HashSet::new();
            let mut current = node;
            loop {
                if current.is_iri_of(rdf::NIL) {
                    break;
                }
                if !visited.insert(current.clone()) {
                    return Err(GraphSourceError::structural(format!(
                        "circular rdf:rest chain through list node {}",
                        current
                    )));
                }

                let first = exactly_one(
                    self.source.property(&current, rdf::FIRST).await?,
                    &current,
                    "rdf:first",
                )?;
                let rest = exactly_one(
                    self.source.property(&current, rdf::REST).await?,
                    &current,
                    "rdf:rest",
                )?;

                result.push(first);
                current = rest;
            }
        }

        Ok(result)
    }

    /// First literal value of the predicate
    pub async fn literal(&self, predicate: &str) -> Result<Option<Term>> {
        Ok(self.literals(predicate).await?.into_iter().next())
    }

    /// All literal values of the predicate
    pub async fn literals(&self, predicate: &str) -> Result<Vec<Term>> {
        Ok(self
            .source
            .property(&self.subject, predicate)
            .await?
            .into_iter()
            .filter(Term::is_literal)
            .collect())
    }

    /// Fold literal values into a language-tag map
    ///
    /// Untagged literals key on the empty string. Returns `None` when the
    /// predicate has no literal values at all. A duplicate tag overwrites
    /// the earlier value (last wins).
    pub async fn language_string(&self, predicate: &str) -> Result<Option<LanguageString>> {
        let literals = self.literals(predicate).await?;
        if literals.is_empty() {
            return Ok(None);
        }

        let mut map = LanguageString::new();
        for literal in &literals {
            if let Some((lexical, _, language)) = literal.as_literal() {
                let tag = language.unwrap_or("").to_string();
                if map.insert(tag.clone(), lexical.to_string()).is_some() {
                    warn!(
                        subject = %self.subject,
                        predicate,
                        tag = %tag,
                        "Duplicate language tag; keeping the later value"
                    );
                }
            }
        }
        Ok(Some(map))
    }

    /// First IRI value of the predicate, as a string
    pub async fn iri_value(&self, predicate: &str) -> Result<Option<String>> {
        Ok(self
            .iris(predicate)
            .await?
            .into_iter()
            .next())
    }

    /// All IRI values of the predicate, as strings (blank nodes dropped)
    pub async fn iris(&self, predicate: &str) -> Result<Vec<String>> {
        Ok(self
            .nodes(predicate)
            .await?
            .iter()
            .filter_map(|t| t.as_iri().map(str::to_string))
            .collect())
    }

    /// All IRI values with collections expanded, as strings (blank nodes dropped)
    pub async fn iris_extended(&self, predicate: &str) -> Result<Vec<String>> {
        Ok(self
            .nodes_extended(predicate)
            .await?
            .iter()
            .filter_map(|t| t.as_iri().map(str::to_string))
            .collect())
    }

    /// The subject's `rdf:type` IRIs
    pub async fn types(&self) -> Result<Vec<String>> {
        self.iris(rdf::TYPE).await
    }

    /// All node subjects pointing at the bound subject through the predicate
    pub async fn reverse_nodes(&self, predicate: &str) -> Result<Vec<Term>> {
        Ok(self
            .source
            .reverse_property(predicate, &self.subject)
            .await?
            .into_iter()
            .filter(Term::is_node)
            .collect())
    }

    /// Reverse subjects as IRI strings (blank nodes dropped)
    pub async fn reverse_iris(&self, predicate: &str) -> Result<Vec<String>> {
        Ok(self
            .reverse_nodes(predicate)
            .await?
            .iter()
            .filter_map(|t| t.as_iri().map(str::to_string))
            .collect())
    }
}

impl std::fmt::Debug for BoundNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundNode")
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

/// Require exactly one edge value on a list node
fn exactly_one(mut terms: Vec<Term>, node: &Term, predicate: &str) -> Result<Term> {
    match terms.len() {
        1 => Ok(terms.remove(0)),
        0 => Err(GraphSourceError::structural(format!(
            "list node {} has no {} edge",
            node, predicate
        ))),
        n => Err(GraphSourceError::structural(format!(
            "list node {} has {} {} edges, expected exactly one",
            node, n, predicate
        ))),
    }
}
