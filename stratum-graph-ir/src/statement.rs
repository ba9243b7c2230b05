//! RDF statements (quads)
//!
//! A statement is a quad: subject, predicate, object, graph. The subject,
//! predicate, and graph positions never hold a literal; the object position
//! may hold any term. Triples are statements in the default graph.

use crate::Term;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for positionally invalid statement components
#[derive(Debug, Error)]
pub enum StatementError {
    /// Literal in subject position
    #[error("literal is not a valid statement subject: {0}")]
    LiteralSubject(String),

    /// Non-IRI in predicate position
    #[error("statement predicate must be an IRI, got: {0}")]
    InvalidPredicate(String),

    /// Literal in graph position
    #[error("literal is not a valid graph name: {0}")]
    LiteralGraph(String),

    /// Default-graph marker outside the graph position
    #[error("default graph marker is only valid in the graph position")]
    MisplacedDefaultGraph,
}

/// An RDF quad
///
/// Construct through [`Statement::new`] or [`Statement::triple`]; both
/// enforce the positional invariants, so a held `Statement` is always
/// well-formed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Statement {
    subject: Term,
    predicate: Term,
    object: Term,
    graph: Term,
}

impl Statement {
    /// Create a quad, validating positional invariants
    pub fn new(
        subject: Term,
        predicate: Term,
        object: Term,
        graph: Term,
    ) -> Result<Self, StatementError> {
        if subject.is_literal() {
            return Err(StatementError::LiteralSubject(subject.to_string()));
        }
        if !subject.is_node() {
            return Err(StatementError::MisplacedDefaultGraph);
        }
        if !predicate.is_iri() {
            return Err(StatementError::InvalidPredicate(predicate.to_string()));
        }
        if object.is_default_graph() {
            return Err(StatementError::MisplacedDefaultGraph);
        }
        if graph.is_literal() {
            return Err(StatementError::LiteralGraph(graph.to_string()));
        }
        Ok(Self {
            subject,
            predicate,
            object,
            graph,
        })
    }

    /// Create a triple (a statement in the default graph)
    pub fn triple(subject: Term, predicate: Term, object: Term) -> Result<Self, StatementError> {
        Self::new(subject, predicate, object, Term::DefaultGraph)
    }

    /// The subject term (IRI or blank node)
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// The predicate term (always an IRI)
    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    /// The predicate IRI
    pub fn predicate_iri(&self) -> &str {
        self.predicate.as_iri().unwrap_or_default()
    }

    /// The object term
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// The graph term (IRI, blank node, or the default graph)
    pub fn graph(&self) -> &Term {
        &self.graph
    }

    /// Consume into (subject, predicate, object, graph)
    pub fn into_parts(self) -> (Term, Term, Term, Term) {
        (self.subject, self.predicate, self.object, self.graph)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if !self.graph.is_default_graph() {
            write!(f, " {}", self.graph)?;
        }
        write!(f, " .")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_in_default_graph() {
        let st = Statement::triple(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
        )
        .unwrap();
        assert!(st.graph().is_default_graph());
        assert_eq!(st.predicate_iri(), "http://example.org/p");
    }

    #[test]
    fn test_literal_subject_rejected() {
        let err = Statement::triple(
            Term::string("nope"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
        );
        assert!(matches!(err, Err(StatementError::LiteralSubject(_))));
    }

    #[test]
    fn test_blank_predicate_rejected() {
        let err = Statement::triple(
            Term::iri("http://example.org/s"),
            Term::blank("p"),
            Term::string("o"),
        );
        assert!(matches!(err, Err(StatementError::InvalidPredicate(_))));
    }

    #[test]
    fn test_literal_graph_rejected() {
        let err = Statement::new(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
            Term::string("g"),
        );
        assert!(matches!(err, Err(StatementError::LiteralGraph(_))));
    }

    #[test]
    fn test_named_graph_display() {
        let st = Statement::new(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::iri("http://example.org/o"),
            Term::iri("http://example.org/g"),
        )
        .unwrap();
        assert_eq!(
            format!("{}", st),
            "<http://example.org/s> <http://example.org/p> <http://example.org/o> <http://example.org/g> ."
        );
    }
}
