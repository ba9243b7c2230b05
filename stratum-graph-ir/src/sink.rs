//! StatementSink - event interface for parser output
//!
//! Parsers emit whole statements plus prefix/base declarations to a sink
//! without knowing the concrete collector type. The default collector
//! gathers everything into a [`Dataset`].

use crate::{Dataset, Statement};

/// Event-driven interface for statement production
///
/// Implementations must tolerate `on_prefix`/`on_base` arriving interleaved
/// with statements; Turtle allows directives mid-document.
pub trait StatementSink {
    /// A prefix declaration was seen
    fn on_prefix(&mut self, prefix: &str, namespace: &str);

    /// A base declaration was seen
    fn on_base(&mut self, base: &str);

    /// A complete statement was produced
    fn statement(&mut self, statement: Statement);
}

/// Sink that collects statements into a [`Dataset`]
#[derive(Debug, Default)]
pub struct StatementCollector {
    dataset: Dataset,
}

impl StatementCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish collection and return the dataset
    pub fn finish(self) -> Dataset {
        self.dataset
    }
}

impl StatementSink for StatementCollector {
    fn on_prefix(&mut self, prefix: &str, namespace: &str) {
        self.dataset.add_prefix(prefix, namespace);
    }

    fn on_base(&mut self, base: &str) {
        self.dataset.base = Some(base.to_string());
    }

    fn statement(&mut self, statement: Statement) {
        self.dataset.push(statement);
    }
}
