//! Parser for Turtle, TriG, and N-Quads emitting to a StatementSink.
//!
//! One grammar covers all three syntaxes accepted by the model compiler:
//! plain Turtle, TriG graph blocks (`GRAPH <g> { ... }` and `<g> { ... }`),
//! and N-Quads documents (an optional graph term before the closing dot).
//!
//! Statements belonging to one top-level statement group are buffered and
//! flushed at the terminating token, so a trailing graph label applies to
//! every statement the group produced.

use std::collections::HashMap;

use stratum_graph_ir::{Statement, StatementSink, Term};
use stratum_vocab::{rdf, xsd};

use crate::error::{Result, TurtleError};
use crate::lex::{tokenize, Token, TokenKind};

/// Parser state.
pub struct Parser<'a, S> {
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut S,
    /// Prefix mappings (prefix -> namespace IRI)
    prefixes: HashMap<String, String>,
    /// Base IRI for relative IRI resolution
    base: Option<String>,
    /// Statements of the current top-level group, flushed at the dot
    pending: Vec<(Term, Term, Term)>,
    /// Counter for generated blank node labels
    blank_seq: u32,
}

impl<'a, S: StatementSink> Parser<'a, S> {
    /// Create a new parser over the given input.
    pub fn new(input: &str, sink: &'a mut S) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            sink,
            prefixes: HashMap::new(),
            base: None,
            pending: Vec::new(),
            blank_seq: 0,
        })
    }

    /// Parse the entire document.
    pub fn parse(mut self) -> Result<()> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.pos];
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<&Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(TurtleError::parse(
                self.current().start,
                format!("expected {}, found {}", kind, self.current().kind),
            ))
        }
    }

    fn fresh_blank(&mut self) -> Term {
        let term = Term::blank(format!("gen{}", self.blank_seq));
        self.blank_seq += 1;
        term
    }

    /// Parse a single top-level statement (directive, graph block, or triples).
    fn parse_statement(&mut self) -> Result<()> {
        match &self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            TokenKind::KwGraph => {
                self.advance();
                let graph = self.parse_graph_name()?;
                self.expect(&TokenKind::LBrace)?;
                self.parse_graph_block(graph)
            }
            TokenKind::LBrace => {
                // TriG default graph block: { ... }
                self.advance();
                self.parse_graph_block(Term::DefaultGraph)
            }
            TokenKind::Eof => Ok(()),
            TokenKind::Iri(_)
            | TokenKind::PrefixedName { .. }
            | TokenKind::PrefixedNameNs(_)
            | TokenKind::BlankNodeLabel(_) => {
                // Either `<g> { ... }` or the subject of a triple group.
                let node = self.parse_node_term()?;
                if self.check(&TokenKind::LBrace) {
                    self.advance();
                    self.parse_graph_block(node)
                } else {
                    self.parse_triple_group(node)
                }
            }
            _ => {
                let subject = self.parse_subject()?;
                self.parse_triple_group(subject)
            }
        }
    }

    /// Parse @prefix or PREFIX.
    fn parse_prefix_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlPrefix);
        self.advance();

        let prefix = match &self.current().kind {
            TokenKind::PrefixedNameNs(p) => p.to_string(),
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected prefix namespace",
                ))
            }
        };
        self.advance();

        let namespace = match &self.current().kind.clone() {
            TokenKind::Iri(iri) => self.resolve_iri(iri)?,
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected IRI for prefix namespace",
                ))
            }
        };
        self.advance();

        self.sink.on_prefix(&prefix, &namespace);
        self.prefixes.insert(prefix, namespace);

        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }

        Ok(())
    }

    /// Parse @base or BASE.
    fn parse_base_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlBase);
        self.advance();

        let base_iri = match &self.current().kind {
            TokenKind::Iri(iri) => iri.to_string(),
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected IRI for base",
                ))
            }
        };
        self.advance();

        self.sink.on_base(&base_iri);
        self.base = Some(base_iri);

        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }

        Ok(())
    }

    /// Parse a graph name (IRI or blank node).
    fn parse_graph_name(&mut self) -> Result<Term> {
        match &self.current().kind {
            TokenKind::Iri(_)
            | TokenKind::PrefixedName { .. }
            | TokenKind::PrefixedNameNs(_)
            | TokenKind::BlankNodeLabel(_) => self.parse_node_term(),
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected graph name, found {}", self.current().kind),
            )),
        }
    }

    /// Parse statements inside a `{ ... }` block, flushing into `graph`.
    fn parse_graph_block(&mut self, graph: Term) -> Result<()> {
        loop {
            match &self.current().kind {
                TokenKind::RBrace => {
                    self.advance();
                    return Ok(());
                }
                TokenKind::Eof => {
                    return Err(TurtleError::parse(
                        self.current().start,
                        "unterminated graph block",
                    ));
                }
                _ => {
                    let subject = self.parse_subject()?;
                    self.parse_predicate_object_list(subject)?;
                    self.flush(&graph)?;
                    // The dot is optional before the closing brace
                    if self.check(&TokenKind::Dot) {
                        self.advance();
                    }
                }
            }
        }
    }

    /// Parse one top-level triple group with a known subject.
    ///
    /// After the predicate-object list an optional graph label may follow
    /// (N-Quads form); it applies to every statement of the group.
    fn parse_triple_group(&mut self, subject: Term) -> Result<()> {
        self.parse_predicate_object_list(subject)?;

        let graph = match &self.current().kind {
            TokenKind::Iri(_)
            | TokenKind::PrefixedName { .. }
            | TokenKind::PrefixedNameNs(_)
            | TokenKind::BlankNodeLabel(_) => self.parse_node_term()?,
            _ => Term::DefaultGraph,
        };

        self.expect(&TokenKind::Dot)?;
        self.flush(&graph)
    }

    /// Emit the buffered statements of the current group into `graph`.
    fn flush(&mut self, graph: &Term) -> Result<()> {
        let position = self.current().start;
        for (s, p, o) in std::mem::take(&mut self.pending) {
            let statement = Statement::new(s, p, o, graph.clone())
                .map_err(|e| TurtleError::parse(position, e.to_string()))?;
            self.sink.statement(statement);
        }
        Ok(())
    }

    /// Parse a simple node term: IRI, prefixed name, or blank node label.
    fn parse_node_term(&mut self) -> Result<Term> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(iri)?;
                self.advance();
                Ok(Term::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                let term = Term::blank(label.as_ref());
                self.advance();
                Ok(term)
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected node term, found {}", self.current().kind),
            )),
        }
    }

    /// Parse a subject (node term, blank node property list, or collection).
    fn parse_subject(&mut self) -> Result<Term> {
        match &self.current().kind {
            TokenKind::Anon => {
                self.advance();
                Ok(self.fresh_blank())
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::Nil => {
                self.advance();
                Ok(Term::iri(rdf::NIL))
            }
            TokenKind::LParen => self.parse_collection(),
            _ => self.parse_node_term(),
        }
    }

    /// Parse a predicate (IRI, prefixed name, or `a`).
    fn parse_predicate(&mut self) -> Result<Term> {
        if matches!(self.current().kind, TokenKind::KwA) {
            self.advance();
            return Ok(Term::iri(rdf::TYPE));
        }
        let term = self.parse_node_term()?;
        if term.is_blank() {
            return Err(TurtleError::parse(
                self.current().start,
                "blank node is not a valid predicate",
            ));
        }
        Ok(term)
    }

    /// Parse `predicate object (, object)* (; predicate object...)*`.
    fn parse_predicate_object_list(&mut self, subject: Term) -> Result<()> {
        loop {
            let predicate = self.parse_predicate()?;

            loop {
                let object = self.parse_object()?;
                self.pending
                    .push((subject.clone(), predicate.clone(), object));

                if self.check(&TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }

            if self.check(&TokenKind::Semicolon) {
                self.advance();
                // A semicolon may be trailing (before `.`, `]`, or `}`)
                match &self.current().kind {
                    TokenKind::Dot
                    | TokenKind::RBracket
                    | TokenKind::RBrace
                    | TokenKind::Eof => break,
                    _ => continue,
                }
            }
            break;
        }
        Ok(())
    }

    /// Parse an object term (any node or literal form).
    fn parse_object(&mut self) -> Result<Term> {
        match &self.current().kind.clone() {
            TokenKind::Anon => {
                self.advance();
                Ok(self.fresh_blank())
            }
            TokenKind::LBracket => self.parse_blank_node_property_list(),
            TokenKind::Nil => {
                self.advance();
                Ok(Term::iri(rdf::NIL))
            }
            TokenKind::LParen => self.parse_collection(),
            TokenKind::String(value) => {
                self.advance();
                match &self.current().kind.clone() {
                    TokenKind::LangTag(lang) => {
                        self.advance();
                        Ok(Term::lang_string(value.as_ref(), lang.as_ref()))
                    }
                    TokenKind::DoubleCaret => {
                        self.advance();
                        let datatype = self.parse_node_term()?;
                        let datatype_iri = datatype.as_iri().ok_or_else(|| {
                            TurtleError::parse(
                                self.current().start,
                                "datatype must be an IRI",
                            )
                        })?;
                        Ok(Term::typed(value.as_ref(), datatype_iri))
                    }
                    _ => Ok(Term::string(value.as_ref())),
                }
            }
            TokenKind::Integer(lexical) => {
                self.advance();
                Ok(Term::typed(lexical.as_ref(), xsd::INTEGER))
            }
            TokenKind::Decimal(lexical) => {
                self.advance();
                Ok(Term::typed(lexical.as_ref(), xsd::DECIMAL))
            }
            TokenKind::Double(lexical) => {
                self.advance();
                Ok(Term::typed(lexical.as_ref(), xsd::DOUBLE))
            }
            TokenKind::KwTrue => {
                self.advance();
                Ok(Term::boolean(true))
            }
            TokenKind::KwFalse => {
                self.advance();
                Ok(Term::boolean(false))
            }
            _ => self.parse_node_term(),
        }
    }

    /// Parse `[ predicate-object-list ]`, returning the fresh blank node.
    fn parse_blank_node_property_list(&mut self) -> Result<Term> {
        self.expect(&TokenKind::LBracket)?;
        let node = self.fresh_blank();
        self.parse_predicate_object_list(node.clone())?;
        self.expect(&TokenKind::RBracket)?;
        Ok(node)
    }

    /// Parse `( object... )`, expanding to an rdf:first/rdf:rest chain.
    fn parse_collection(&mut self) -> Result<Term> {
        self.expect(&TokenKind::LParen)?;

        let mut items = Vec::new();
        while !self.check(&TokenKind::RParen) {
            if self.is_at_end() {
                return Err(TurtleError::parse(
                    self.current().start,
                    "unterminated collection",
                ));
            }
            items.push(self.parse_object()?);
        }
        self.advance(); // consume ')'

        if items.is_empty() {
            return Ok(Term::iri(rdf::NIL));
        }

        let nodes: Vec<Term> = items.iter().map(|_| self.fresh_blank()).collect();
        for (i, item) in items.into_iter().enumerate() {
            self.pending
                .push((nodes[i].clone(), Term::iri(rdf::FIRST), item));
            let rest = if i + 1 < nodes.len() {
                nodes[i + 1].clone()
            } else {
                Term::iri(rdf::NIL)
            };
            self.pending
                .push((nodes[i].clone(), Term::iri(rdf::REST), rest));
        }

        Ok(nodes[0].clone())
    }

    /// Resolve an IRI reference against the base, if relative.
    fn resolve_iri(&self, reference: &str) -> Result<String> {
        if has_scheme(reference) {
            return Ok(reference.to_string());
        }

        let base = self.base.as_deref().ok_or_else(|| {
            TurtleError::IriResolution(format!("relative IRI '{}' without base", reference))
        })?;

        if reference.is_empty() {
            return Ok(base.to_string());
        }

        if let Some(fragment) = reference.strip_prefix('#') {
            let stem = base.split('#').next().unwrap_or(base);
            return Ok(format!("{}#{}", stem, fragment));
        }

        if reference.starts_with('/') {
            if let Some(authority_end) = authority_end(base) {
                return Ok(format!("{}{}", &base[..authority_end], reference));
            }
            return Ok(format!("{}{}", base, reference));
        }

        // Relative path: replace the last segment of the base path
        let stem = match base.rfind('/') {
            Some(pos) => &base[..=pos],
            None => base,
        };
        Ok(format!("{}{}", stem, reference))
    }

    /// Expand a prefixed name to a full IRI.
    fn expand_prefixed_name(&self, prefix: &str, local: &str) -> Result<String> {
        if let Some(namespace) = self.prefixes.get(prefix) {
            Ok(format!("{}{}", namespace, local))
        } else {
            Err(TurtleError::UndefinedPrefix(prefix.to_string()))
        }
    }
}

/// Check whether a reference begins with an IRI scheme (`alpha (alnum|+|-|.)* :`).
fn has_scheme(reference: &str) -> bool {
    let mut chars = reference.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    for c in chars {
        match c {
            ':' => return true,
            c if c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.' => {}
            _ => return false,
        }
    }
    false
}

/// Byte offset of the end of the authority component, if the IRI has one.
fn authority_end(iri: &str) -> Option<usize> {
    let start = iri.find("://")? + 3;
    match iri[start..].find('/') {
        Some(pos) => Some(start + pos),
        None => Some(iri.len()),
    }
}

/// Parse a document, emitting statements to the given sink.
pub fn parse<S: StatementSink>(input: &str, sink: &mut S) -> Result<()> {
    Parser::new(input, sink)?.parse()
}
