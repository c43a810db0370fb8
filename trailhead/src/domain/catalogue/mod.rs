//! In-memory trail catalogue and its query surface.
//!
//! The catalogue owns an ordered sequence of published [`TrailRecord`]s and
//! answers the browse screen's queries: substring search, the featured
//! carousel, and point lookup by id. Search results always preserve the
//! original catalogue order; there is no re-ranking.

use std::collections::HashSet;

use tracing::debug;

use super::ports::TrailStore;
use super::trail::{TrailId, TrailRecord};


/// Errors raised by catalogue lookups and mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// No record carries the requested id.
    #[error("no trail found with id {id}")]
    TrailNotFound {
        /// The id that missed.
        id: TrailId,
    },
    /// A record with this id is already present.
    #[error("trail id {id} is already in the catalogue")]
    DuplicateTrailId {
        /// The clashing id.
        id: TrailId,
    },
}

/// Ordered collection of published trails with an active search query.
///
/// The featured subset is derived from the *current* search results, not
/// the full catalogue: a query that matches no featured trail empties the
/// featured carousel as well. This mirrors the original client, which
/// filters first and selects featured cards from the filtered list.
#[derive(Debug, Clone, Default)]
pub struct TrailCatalogue {
    trails: Vec<TrailRecord>,
    active_query: String,
}

impl TrailCatalogue {
    /// Build a catalogue from published records.
    ///
    /// Fails with [`CatalogueError::DuplicateTrailId`] if two records share
    /// an id.
    pub fn new(trails: Vec<TrailRecord>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for trail in &trails {
            if !seen.insert(trail.id().clone()) {
                return Err(CatalogueError::DuplicateTrailId {
                    id: trail.id().clone(),
                });
            }
        }
        Ok(Self {
            trails,
            active_query: String::new(),
        })
    }

    /// An empty catalogue with no active query.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record `query` as the active query and return the matching trails.
    ///
    /// A record matches when the trimmed query is empty, or when it is a
    /// case-insensitive substring of the record's name or location. Results
    /// keep catalogue order.
    pub fn search(&mut self, query: &str) -> Vec<&TrailRecord> {
        query.clone_into(&mut self.active_query);
        let results: Vec<&TrailRecord> = self.filtered().collect();
        debug!(
            query = self.active_query.as_str(),
            matches = results.len(),
            "catalogue search"
        );
        results
    }

    /// The featured subset of the current search results, in catalogue order.
    pub fn featured(&self) -> Vec<&TrailRecord> {
        self.filtered().filter(|trail| trail.featured()).collect()
    }

    /// The current search results without changing the active query.
    pub fn results(&self) -> Vec<&TrailRecord> {
        self.filtered().collect()
    }

    /// Point lookup by id, independent of the active query.
    pub fn by_id(&self, id: &TrailId) -> Result<&TrailRecord, CatalogueError> {
        self.trails
            .iter()
            .find(|trail| trail.id() == id)
            .ok_or_else(|| CatalogueError::TrailNotFound { id: id.clone() })
    }

    /// The query most recently passed to [`TrailCatalogue::search`].
    pub fn active_query(&self) -> &str {
        self.active_query.as_str()
    }

    /// Every record, ignoring the active query.
    pub fn all(&self) -> &[TrailRecord] {
        self.trails.as_slice()
    }

    /// Number of records in the catalogue.
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    /// Whether the catalogue holds no records.
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    fn filtered(&self) -> impl Iterator<Item = &TrailRecord> {
        let needle = self.active_query.trim().to_lowercase();
        self.trails
            .iter()
            .filter(move |trail| needle.is_empty() || matches_query(trail, &needle))
    }
}

fn matches_query(trail: &TrailRecord, needle: &str) -> bool {
    trail.name().to_lowercase().contains(needle)
        || trail.location().to_lowercase().contains(needle)
}

impl TrailStore for TrailCatalogue {
    fn insert(&mut self, record: TrailRecord) -> Result<(), CatalogueError> {
        if self.by_id(record.id()).is_ok() {
            return Err(CatalogueError::DuplicateTrailId {
                id: record.id().clone(),
            });
        }
        self.trails.push(record);
        Ok(())
    }

    fn remove(&mut self, id: &TrailId) -> Result<TrailRecord, CatalogueError> {
        let position = self
            .trails
            .iter()
            .position(|trail| trail.id() == id)
            .ok_or_else(|| CatalogueError::TrailNotFound { id: id.clone() })?;
        Ok(self.trails.remove(position))
    }

    fn records(&self) -> &[TrailRecord] {
        self.trails.as_slice()
    }
}
