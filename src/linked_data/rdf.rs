//! RDF graph layer for linked-data documents.
//!
//! This module provides RDF/XML parsing using the oxrdfio library. It copies
//! the parsed triples into an owned [`RdfGraph`] and offers the few lookups the
//! authority parsers need: first literal of a property, optionally restricted
//! to a subject and a language tag.

use std::io::Read;

use oxrdf::{NamedOrBlankNode, Quad, Term};
use oxrdfio::{RdfFormat, RdfParser};

use crate::error::{HistogisError, Result};

/// A single RDF triple (subject, predicate, object).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdfTriple {
    /// The subject of the triple.
    pub subject: RdfNode,
    /// The predicate IRI of the triple.
    pub predicate: String,
    /// The object of the triple.
    pub object: RdfNode,
}

impl RdfTriple {
    /// Creates a new RDF triple.
    #[must_use]
    pub fn new(subject: RdfNode, predicate: impl Into<String>, object: RdfNode) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// An RDF node (subject or object in a triple).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RdfNode {
    /// A named node (IRI).
    Uri(String),
    /// A blank node with a local identifier.
    BlankNode(String),
    /// A literal value with optional language tag.
    Literal {
        /// The literal value.
        value: String,
        /// Optional language tag (e.g., "de", "en").
        language: Option<String>,
    },
}

impl RdfNode {
    /// Creates a new URI node.
    #[must_use]
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }

    /// Creates a new plain literal.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: None,
        }
    }

    /// Creates a new literal with a language tag.
    #[must_use]
    pub fn literal_with_lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: Some(lang.into()),
        }
    }

    /// Returns the lexical value if this is a literal.
    #[must_use]
    pub fn literal_value(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns true if this is a literal tagged with `lang`.
    #[must_use]
    pub fn has_language(&self, lang: &str) -> bool {
        matches!(self, Self::Literal { language: Some(l), .. } if l.eq_ignore_ascii_case(lang))
    }

    /// Returns true if this node is the IRI `iri`.
    #[must_use]
    pub fn is_uri(&self, iri: &str) -> bool {
        matches!(self, Self::Uri(u) if u == iri)
    }
}

/// An RDF graph containing triples in document order.
#[derive(Debug, Clone, Default)]
pub struct RdfGraph {
    triples: Vec<RdfTriple>,
}

impl RdfGraph {
    /// Creates a new empty RDF graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple from components.
    pub fn add(&mut self, subject: RdfNode, predicate: impl Into<String>, object: RdfNode) {
        self.triples.push(RdfTriple::new(subject, predicate, object));
    }

    /// Returns the number of triples in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns an iterator over the triples.
    pub fn triples(&self) -> impl Iterator<Item = &RdfTriple> {
        self.triples.iter()
    }

    /// Returns the objects of every triple with the given predicate.
    pub fn objects<'a, 'p>(
        &'a self,
        predicate: &'p str,
    ) -> impl Iterator<Item = &'a RdfNode> + 'p
    where
        'a: 'p,
    {
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Returns the first literal value of `predicate`, on any subject.
    #[must_use]
    pub fn first_literal<'a>(&'a self, predicate: &str) -> Option<&'a str> {
        self.objects(predicate).find_map(RdfNode::literal_value)
    }

    /// Returns the first literal of `predicate` on `subject` tagged `lang`.
    #[must_use]
    pub fn literal_for_subject_lang(
        &self,
        subject: &str,
        predicate: &str,
        lang: &str,
    ) -> Option<&str> {
        self.triples
            .iter()
            .filter(|t| t.predicate == predicate && t.subject.is_uri(subject))
            .find(|t| t.object.has_language(lang))
            .and_then(|t| t.object.literal_value())
    }

    /// Parses an RDF/XML document from a reader.
    ///
    /// `base_iri` resolves relative IRIs; pass the document URL.
    ///
    /// # Errors
    ///
    /// Returns [`HistogisError::RecordParse`] if the base IRI is invalid or
    /// the document is not well-formed RDF/XML.
    pub fn parse_rdf_xml<R: Read>(reader: R, base_iri: Option<&str>) -> Result<Self> {
        let mut parser = RdfParser::from_format(RdfFormat::RdfXml);
        if let Some(base) = base_iri {
            parser = parser
                .with_base_iri(base)
                .map_err(|e| HistogisError::RecordParse(format!("Invalid base IRI: {e}")))?;
        }

        let mut graph = Self::new();
        for result in parser.for_reader(reader) {
            let quad = result.map_err(|e| HistogisError::RecordParse(e.to_string()))?;
            graph.triples.push(from_oxrdf_quad(&quad)?);
        }

        Ok(graph)
    }

    /// Parses an RDF/XML document from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_rdf_xml(input.as_bytes(), None)
    }
}

/// Converts an oxrdf Quad to our [`RdfTriple`], dropping the graph name.
fn from_oxrdf_quad(quad: &Quad) -> Result<RdfTriple> {
    let subject = match &quad.subject {
        NamedOrBlankNode::NamedNode(n) => RdfNode::Uri(n.as_str().to_string()),
        NamedOrBlankNode::BlankNode(b) => RdfNode::BlankNode(b.as_str().to_string()),
        #[allow(unreachable_patterns)]
        _ => {
            return Err(HistogisError::RecordParse("Unsupported subject type".into()));
        },
    };

    let object = match &quad.object {
        Term::NamedNode(n) => RdfNode::Uri(n.as_str().to_string()),
        Term::BlankNode(b) => RdfNode::BlankNode(b.as_str().to_string()),
        Term::Literal(lit) => RdfNode::Literal {
            value: lit.value().to_string(),
            language: lit.language().map(String::from),
        },
        #[allow(unreachable_patterns)]
        _ => {
            return Err(HistogisError::RecordParse("Unsupported object type".into()));
        },
    };

    Ok(RdfTriple::new(subject, quad.predicate.as_str(), object))
}
