//! RDF term and statement value types for the Stratum model compiler
//!
//! This crate provides the canonical quad representation shared by parsers,
//! graph sources, and the model loader. Design principles:
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!    Prefix handling is a parser concern.
//!
//! 2. **Explicit datatypes** - Literals always carry a datatype IRI. Plain
//!    strings use `xsd:string`, language-tagged strings use `rdf:langString`.
//!
//! 3. **Bag semantics by default** - `Dataset` keeps duplicates; call
//!    `dedupe()` explicitly for set semantics.
//!
//! # Example
//!
//! ```
//! use stratum_graph_ir::{Dataset, Statement, Term};
//!
//! let mut dataset = Dataset::new();
//! dataset.push(Statement::triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! ).unwrap());
//! dataset.sort();
//! ```

mod dataset;
mod sink;
mod statement;
mod term;

pub use dataset::Dataset;
pub use sink::{StatementCollector, StatementSink};
pub use statement::{Statement, StatementError};
pub use term::{BlankId, Term};

/// Map from language tag to value
///
/// The empty-string key holds the untagged value. `BTreeMap` keeps
/// iteration order deterministic.
pub type LanguageString = std::collections::BTreeMap<String, String>;
