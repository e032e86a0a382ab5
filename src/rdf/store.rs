//! In-memory statement store with Turtle durability
//!
//! The store holds the full statement set for the catalog. All queries are
//! full scans, which is fine at the catalog's scale of hundreds to a few
//! thousand resources. Statements keep their insertion order so every
//! derived view is deterministic.

use super::term::{Iri, Object, Statement, StatementPattern};
use super::turtle::{self, ParseError, SerializeError};
use super::vocab;
use indexmap::{IndexMap, IndexSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O failure while reading or writing the statement file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The statement file could not be parsed
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// The statement set could not be serialized
    #[error("{0}")]
    Serialize(#[from] SerializeError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One row of the typed-resource query: a subject with one of its
/// recognized types and its optional comment/address companions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedResourceRow {
    /// Subject reference
    pub subject: Iri,
    /// One recognized type of the subject
    pub rdf_type: Iri,
    /// Comment literal, if any
    pub comment: Option<String>,
    /// Address literal, if any
    pub address: Option<String>,
}

/// In-memory statement set
#[derive(Debug, Clone, Default)]
pub struct StatementStore {
    /// All statements, in insertion order
    statements: IndexSet<Statement>,
}

impl StatementStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a Turtle file
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut store = Self::new();
        for statement in turtle::parse(&text)? {
            store.insert(statement);
        }
        debug!("loaded {} statements from {}", store.len(), path.display());
        Ok(store)
    }

    /// Serialize the full statement set to a Turtle file
    ///
    /// Writes to a sibling temp file first and renames it over the target,
    /// so a crash mid-write never leaves a truncated file behind.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let text = turtle::serialize(self.statements.iter())?;

        let mut tmp = path.as_os_str().to_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, text)?;
        fs::rename(&tmp, path)?;

        debug!("saved {} statements to {}", self.len(), path.display());
        Ok(())
    }

    /// Insert a statement; inserting an existing statement is a no-op.
    /// Returns whether the statement was newly added.
    pub fn insert(&mut self, statement: Statement) -> bool {
        self.statements.insert(statement)
    }

    /// Remove a single statement, preserving the order of the rest.
    /// Returns whether the statement was present.
    pub fn remove(&mut self, statement: &Statement) -> bool {
        self.statements.shift_remove(statement)
    }

    /// Remove every statement with the given subject and return them.
    /// Removing from an empty match set is a no-op.
    pub fn remove_all(&mut self, subject: &Iri) -> Vec<Statement> {
        let removed: Vec<Statement> = self
            .statements
            .iter()
            .filter(|st| &st.subject == subject)
            .cloned()
            .collect();
        if !removed.is_empty() {
            self.statements.retain(|st| &st.subject != subject);
        }
        removed
    }

    /// Pattern test; any field of the pattern may be wildcarded
    pub fn contains(&self, pattern: &StatementPattern) -> bool {
        self.statements.iter().any(|st| pattern.matches(st))
    }

    /// All (predicate, object) pairs for a subject, in insertion order
    pub fn statements_for(&self, subject: &Iri) -> Vec<(Iri, Object)> {
        self.statements
            .iter()
            .filter(|st| &st.subject == subject)
            .map(|st| (st.predicate.clone(), st.object.clone()))
            .collect()
    }

    /// Whether the subject has a type statement whose object is one of
    /// the candidate types
    pub fn has_type_in(&self, subject: &Iri, candidate_types: &[Iri]) -> bool {
        self.statements.iter().any(|st| {
            &st.subject == subject
                && st.predicate == vocab::rdf::TYPE
                && matches!(&st.object, Object::Iri(t) if candidate_types.contains(t))
        })
    }

    /// The typed-resource query backing the catalog views.
    ///
    /// For every subject with at least one type statement whose object is
    /// in `candidate_types`, emits one row per observed combination of
    /// (type, optional comment, optional address), in subject first-seen
    /// order. Comment and address are optional companions; their absence
    /// does not suppress the type row.
    pub fn typed_resource_rows(&self, candidate_types: &[Iri]) -> Vec<TypedResourceRow> {
        #[derive(Default)]
        struct Facts<'a> {
            types: Vec<&'a Iri>,
            comments: Vec<&'a str>,
            addresses: Vec<&'a str>,
        }

        let mut facts: IndexMap<&Iri, Facts> = IndexMap::new();
        for st in &self.statements {
            if st.predicate == vocab::rdf::TYPE {
                if let Object::Iri(t) = &st.object {
                    if candidate_types.contains(t) {
                        facts.entry(&st.subject).or_default().types.push(t);
                    }
                }
            } else if st.predicate == vocab::rdfs::COMMENT {
                facts
                    .entry(&st.subject)
                    .or_default()
                    .comments
                    .push(st.object.lexical());
            } else if st.predicate == vocab::schema::ADDRESS {
                facts
                    .entry(&st.subject)
                    .or_default()
                    .addresses
                    .push(st.object.lexical());
            }
        }

        let mut rows = Vec::new();
        for (subject, f) in &facts {
            if f.types.is_empty() {
                continue;
            }
            let comments: Vec<Option<&str>> = if f.comments.is_empty() {
                vec![None]
            } else {
                f.comments.iter().copied().map(Some).collect()
            };
            let addresses: Vec<Option<&str>> = if f.addresses.is_empty() {
                vec![None]
            } else {
                f.addresses.iter().copied().map(Some).collect()
            };
            for rdf_type in &f.types {
                for comment in &comments {
                    for address in &addresses {
                        rows.push(TypedResourceRow {
                            subject: (*subject).clone(),
                            rdf_type: (*rdf_type).clone(),
                            comment: comment.map(str::to_string),
                            address: address.map(str::to_string),
                        });
                    }
                }
            }
        }
        rows
    }

    /// Get the total number of statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate over all statements in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::term::Literal;

    fn subject(id: &str) -> Iri {
        vocab::resource_iri(id).unwrap()
    }

    fn type_statement(id: &str, rdf_type: oxrdf::NamedNodeRef<'_>) -> Statement {
        Statement::new(subject(id), vocab::rdf::TYPE.into(), Iri::from(rdf_type))
    }

    fn comment_statement(id: &str, text: &str) -> Statement {
        Statement::new(subject(id), vocab::rdfs::COMMENT.into(), Literal::simple(text))
    }

    fn address_statement(id: &str, text: &str) -> Statement {
        Statement::new(subject(id), vocab::schema::ADDRESS.into(), Literal::simple(text))
    }

    fn recognized() -> Vec<Iri> {
        vec![
            vocab::dbo::EVENT.into(),
            vocab::dbo::HISTORIC_BUILDING.into(),
            vocab::dbo::MUSEUM.into(),
            vocab::schema::EVENT.into(),
            vocab::schema::LANDMARKS_OR_HISTORICAL_BUILDINGS.into(),
            vocab::schema::MUSEUM.into(),
        ]
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut store = StatementStore::new();
        let st = comment_statement("Kota_Tua", "Old town");

        assert!(store.insert(st.clone()));
        assert!(!store.insert(st));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_all() {
        let mut store = StatementStore::new();
        store.insert(type_statement("Kota_Tua", vocab::dbo::HISTORIC_BUILDING));
        store.insert(comment_statement("Kota_Tua", "Old town"));
        store.insert(type_statement("Monas", vocab::dbo::HISTORIC_BUILDING));

        let removed = store.remove_all(&subject("Kota_Tua"));
        assert_eq!(removed.len(), 2);
        assert_eq!(store.len(), 1);
        assert!(store.statements_for(&subject("Kota_Tua")).is_empty());

        // removing again is a no-op, not an error
        assert!(store.remove_all(&subject("Kota_Tua")).is_empty());
    }

    #[test]
    fn test_contains_patterns() {
        let mut store = StatementStore::new();
        store.insert(type_statement("Kota_Tua", vocab::dbo::HISTORIC_BUILDING));

        assert!(store.contains(&StatementPattern::about(subject("Kota_Tua"))));
        assert!(store.contains(&StatementPattern::new(
            Some(subject("Kota_Tua")),
            Some(vocab::rdf::TYPE.into()),
            Some(Iri::from(vocab::dbo::HISTORIC_BUILDING).into()),
        )));
        assert!(!store.contains(&StatementPattern::about(subject("Monas"))));
    }

    #[test]
    fn test_statements_for_keeps_insertion_order() {
        let mut store = StatementStore::new();
        store.insert(type_statement("Kota_Tua", vocab::dbo::HISTORIC_BUILDING));
        store.insert(comment_statement("Kota_Tua", "Old town"));
        store.insert(address_statement("Kota_Tua", "West Jakarta"));

        let props = store.statements_for(&subject("Kota_Tua"));
        assert_eq!(props.len(), 3);
        assert_eq!(props[0].0, Iri::from(vocab::rdf::TYPE));
        assert_eq!(props[1].1.lexical(), "Old town");
        assert_eq!(props[2].1.lexical(), "West Jakarta");
    }

    #[test]
    fn test_typed_rows_with_and_without_companions() {
        let mut store = StatementStore::new();
        store.insert(type_statement("Kota_Tua", vocab::dbo::HISTORIC_BUILDING));
        store.insert(comment_statement("Kota_Tua", "Old town"));
        store.insert(type_statement("Bare_Place", vocab::dbo::MUSEUM));

        let rows = store.typed_resource_rows(&recognized());
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].subject, subject("Kota_Tua"));
        assert_eq!(rows[0].comment.as_deref(), Some("Old town"));
        assert_eq!(rows[0].address, None);

        assert_eq!(rows[1].subject, subject("Bare_Place"));
        assert_eq!(rows[1].comment, None);
    }

    #[test]
    fn test_typed_rows_one_per_type() {
        let mut store = StatementStore::new();
        store.insert(type_statement("Museum_Nasional", vocab::dbo::MUSEUM));
        store.insert(type_statement("Museum_Nasional", vocab::schema::MUSEUM));

        let rows = store.typed_resource_rows(&recognized());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rdf_type, Iri::from(vocab::dbo::MUSEUM));
        assert_eq!(rows[1].rdf_type, Iri::from(vocab::schema::MUSEUM));
    }

    #[test]
    fn test_typed_rows_exclude_unrecognized() {
        let mut store = StatementStore::new();
        store.insert(Statement::new(
            subject("Some_Document"),
            vocab::rdf::TYPE.into(),
            Iri::new("http://xmlns.com/foaf/0.1/Document").unwrap(),
        ));
        store.insert(comment_statement("Some_Document", "not a heritage resource"));

        assert!(store.typed_resource_rows(&recognized()).is_empty());
    }

    #[test]
    fn test_has_type_in() {
        let mut store = StatementStore::new();
        store.insert(type_statement("Kota_Tua", vocab::dbo::HISTORIC_BUILDING));

        assert!(store.has_type_in(&subject("Kota_Tua"), &recognized()));
        assert!(!store.has_type_in(&subject("Kota_Tua"), &[vocab::dbo::MUSEUM.into()]));
        assert!(!store.has_type_in(&subject("Monas"), &recognized()));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.ttl");

        let mut store = StatementStore::new();
        store.insert(type_statement("Monas", vocab::dbo::HISTORIC_BUILDING));
        store.insert(comment_statement("Monas", "The national monument"));
        store.insert(address_statement("Monas", "Central Jakarta"));
        store.save(&path).unwrap();

        let reloaded = StatementStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), store.len());
        for st in store.iter() {
            let pattern = StatementPattern::new(
                Some(st.subject.clone()),
                Some(st.predicate.clone()),
                Some(st.object.clone()),
            );
            assert!(reloaded.contains(&pattern), "missing after roundtrip: {st}");
        }
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(StatementStore::load(dir.path().join("absent.ttl")).is_err());
    }
}
