//! Fixed mapping between short type names and canonical type IRIs
//!
//! Reads and writes use intentionally different sets: six canonical IRIs
//! across the two vocabularies count as displayable heritage resources,
//! while only four short names are creatable (the schema.org Event/Museum
//! duplicates are read-compatible but not separately creatable).

use crate::rdf::{vocab, Iri};

/// Static type catalog; built once at startup, never mutated
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    recognized: Vec<Iri>,
    creatable: Vec<(&'static str, Iri)>,
}

impl TypeCatalog {
    /// Build the catalog with its fixed contents
    pub fn new() -> Self {
        Self {
            recognized: vec![
                vocab::dbo::EVENT.into(),
                vocab::dbo::HISTORIC_BUILDING.into(),
                vocab::dbo::MUSEUM.into(),
                vocab::schema::EVENT.into(),
                vocab::schema::LANDMARKS_OR_HISTORICAL_BUILDINGS.into(),
                vocab::schema::MUSEUM.into(),
            ],
            creatable: vec![
                ("Event", vocab::dbo::EVENT.into()),
                ("Museum", vocab::dbo::MUSEUM.into()),
                ("HistoricBuilding", vocab::dbo::HISTORIC_BUILDING.into()),
                (
                    "LandmarksOrHistoricalBuildings",
                    vocab::schema::LANDMARKS_OR_HISTORICAL_BUILDINGS.into(),
                ),
            ],
        }
    }

    /// The six canonical type IRIs used as the read filter
    pub fn recognized(&self) -> &[Iri] {
        &self.recognized
    }

    /// Whether an IRI is one of the recognized canonical types
    pub fn is_recognized(&self, iri: &Iri) -> bool {
        self.recognized.contains(iri)
    }

    /// Resolve a creation short name to its canonical IRI.
    /// Unrecognized names fall back to Event.
    pub fn resolve_creatable(&self, short_name: &str) -> &Iri {
        self.creatable
            .iter()
            .find(|(name, _)| *name == short_name)
            .map(|(_, iri)| iri)
            .unwrap_or(&self.creatable[0].1)
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
