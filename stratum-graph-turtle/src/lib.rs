//! Turtle / TriG / N-Quads parser for Stratum.
//!
//! Parses RDF text into [`stratum_graph_ir::Statement`] values, emitted to a
//! [`stratum_graph_ir::StatementSink`]. One parser covers the three syntaxes
//! the model compiler ingests; TriG graph blocks and N-Quads graph labels
//! produce named-graph statements, plain triples land in the default graph.
//!
//! # Example
//!
//! ```
//! use stratum_graph_turtle::parse_to_dataset;
//!
//! let turtle = r#"
//!     @prefix ex: <http://example.org/> .
//!     ex:alice ex:name "Alice" ;
//!              ex:age 30 .
//! "#;
//!
//! let dataset = parse_to_dataset(turtle).unwrap();
//! assert_eq!(dataset.len(), 2);
//! ```

pub mod error;
pub mod lex;
pub mod parser;

pub use error::{Result, TurtleError};
pub use lex::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, Parser};

use stratum_graph_ir::{Dataset, StatementCollector};

/// Parse a document directly into a [`Dataset`].
pub fn parse_to_dataset(input: &str) -> Result<Dataset> {
    let mut sink = StatementCollector::new();
    parse(input, &mut sink)?;
    Ok(sink.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_to_dataset() {
        let dataset = parse_to_dataset(
            "@prefix ex: <http://example.org/> .\n\
             ex:alice ex:name \"Alice\" .",
        )
        .unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(
            dataset.prefixes.get("ex").map(String::as_str),
            Some("http://example.org/")
        );
    }

    #[test]
    fn test_parse_reports_lexer_errors() {
        assert!(parse_to_dataset("ex:name $ ex:value").is_err());
    }
}
