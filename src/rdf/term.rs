//! RDF term definitions
//!
//! This module provides wrapper types around the oxrdf library for the RDF
//! primitives the catalog stores: IRIs, literals, and statements.

use oxrdf::{Literal as OxLiteral, NamedNode as OxNamedNode, NamedNodeRef};
use std::fmt;
use thiserror::Error;

/// Term errors
#[derive(Error, Debug)]
pub enum TermError {
    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Invalid literal
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}

pub type TermResult<T> = Result<T, TermError>;

/// An absolute resource reference (named node)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri(OxNamedNode);

impl Iri {
    /// Create a new IRI from a string, validating its syntax
    pub fn new(iri: &str) -> TermResult<Self> {
        OxNamedNode::new(iri)
            .map(Self)
            .map_err(|e| TermError::InvalidIri(e.to_string()))
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The last path segment of the IRI (after the final `/` or `#`)
    pub fn local_name(&self) -> &str {
        local_name(self.as_str())
    }

    /// Get the inner oxrdf NamedNode
    pub fn inner(&self) -> &OxNamedNode {
        &self.0
    }
}

/// The last path segment of an IRI string (after the final `/` or `#`)
pub fn local_name(iri: &str) -> &str {
    iri.rfind(['/', '#']).map(|i| &iri[i + 1..]).unwrap_or(iri)
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl From<OxNamedNode> for Iri {
    fn from(node: OxNamedNode) -> Self {
        Self(node)
    }
}

impl From<Iri> for OxNamedNode {
    fn from(iri: Iri) -> Self {
        iri.0
    }
}

impl From<NamedNodeRef<'_>> for Iri {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self(node.into_owned())
    }
}

impl PartialEq<NamedNodeRef<'_>> for Iri {
    fn eq(&self, other: &NamedNodeRef<'_>) -> bool {
        self.0.as_ref() == *other
    }
}

/// RDF literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    /// Create a simple literal (plain string)
    pub fn simple(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    /// Create a literal with a language tag
    pub fn language_tagged(value: impl Into<String>, language: impl Into<String>) -> TermResult<Self> {
        OxLiteral::new_language_tagged_literal(value, language)
            .map(Self)
            .map_err(|e| TermError::InvalidLiteral(e.to_string()))
    }

    /// Create a typed literal
    pub fn typed(value: impl Into<String>, datatype: Iri) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.0))
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        self.0.value()
    }

    /// Get the language tag if present
    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    /// Get the datatype IRI
    pub fn datatype(&self) -> Iri {
        Iri(self.0.datatype().into_owned())
    }

    /// Whether this is a plain `xsd:string` literal
    pub fn is_plain(&self) -> bool {
        self.0.datatype() == oxrdf::vocab::xsd::STRING
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lang) = self.language() {
            write!(f, "\"{}\"@{}", self.value(), lang)
        } else if self.is_plain() {
            write!(f, "\"{}\"", self.value())
        } else {
            write!(f, "\"{}\"^^{}", self.value(), self.datatype())
        }
    }
}

impl From<OxLiteral> for Literal {
    fn from(lit: OxLiteral) -> Self {
        Self(lit)
    }
}

/// Statement object: a resource reference or a literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    /// Resource reference (IRI)
    Iri(Iri),
    /// Literal value
    Literal(Literal),
}

impl Object {
    /// Check if this is a resource reference
    pub fn is_iri(&self) -> bool {
        matches!(self, Object::Iri(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Object::Literal(_))
    }

    /// The plain-string rendering used in API responses: the IRI string
    /// for references, the lexical value for literals
    pub fn lexical(&self) -> &str {
        match self {
            Object::Iri(iri) => iri.as_str(),
            Object::Literal(lit) => lit.value(),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Iri(iri) => write!(f, "{}", iri),
            Object::Literal(lit) => write!(f, "{}", lit),
        }
    }
}

impl From<Iri> for Object {
    fn from(iri: Iri) -> Self {
        Object::Iri(iri)
    }
}

impl From<Literal> for Object {
    fn from(lit: Literal) -> Self {
        Object::Literal(lit)
    }
}

/// A subject-predicate-object statement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// Subject
    pub subject: Iri,
    /// Predicate
    pub predicate: Iri,
    /// Object
    pub object: Object,
}

impl Statement {
    /// Create a new statement
    pub fn new(subject: Iri, predicate: Iri, object: impl Into<Object>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// Statement pattern for queries; `None` fields are wildcards
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatementPattern {
    /// Subject (None = wildcard)
    pub subject: Option<Iri>,
    /// Predicate (None = wildcard)
    pub predicate: Option<Iri>,
    /// Object (None = wildcard)
    pub object: Option<Object>,
}

impl StatementPattern {
    /// Create a new pattern
    pub fn new(subject: Option<Iri>, predicate: Option<Iri>, object: Option<Object>) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Pattern matching every statement about a subject
    pub fn about(subject: Iri) -> Self {
        Self::new(Some(subject), None, None)
    }

    /// Check if a statement matches this pattern
    pub fn matches(&self, statement: &Statement) -> bool {
        if let Some(ref s) = self.subject {
            if s != &statement.subject {
                return false;
            }
        }
        if let Some(ref p) = self.predicate {
            if p != &statement.predicate {
                return false;
            }
        }
        if let Some(ref o) = self.object {
            if o != &statement.object {
                return false;
            }
        }
        true
    }
}
