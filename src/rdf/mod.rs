//! RDF statement model and store
//!
//! This module holds everything the catalog knows about RDF: the term and
//! statement types, the fixed vocabularies, the in-memory statement store,
//! and Turtle (de)serialization for durability.
//!
//! # Example
//!
//! ```rust
//! use pusaka::rdf::{Literal, Statement, StatementStore, vocab};
//!
//! let mut store = StatementStore::new();
//! let subject = vocab::resource_iri("Kota_Tua").unwrap();
//! store.insert(Statement::new(
//!     subject.clone(),
//!     vocab::rdf::TYPE.into(),
//!     pusaka::rdf::Iri::from(vocab::dbo::HISTORIC_BUILDING),
//! ));
//! store.insert(Statement::new(
//!     subject.clone(),
//!     vocab::rdfs::COMMENT.into(),
//!     Literal::simple("The old town of Jakarta"),
//! ));
//!
//! assert_eq!(store.statements_for(&subject).len(), 2);
//! ```

mod store;
mod term;
pub mod turtle;
pub mod vocab;

pub use store::{StatementStore, StoreError, StoreResult, TypedResourceRow};
pub use term::{
    local_name, Iri, Literal, Object, Statement, StatementPattern, TermError, TermResult,
};
pub use turtle::{ParseError, ParseResult, SerializeError, SerializeResult};
