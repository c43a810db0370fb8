//! Collaborator contracts owned by the domain layer.
//!
//! The catalogue is read-only in the shipped screens, but collaborators
//! that persist submitted trails program against [`TrailStore`] rather
//! than the concrete in-memory catalogue.

use super::catalogue::CatalogueError;
use super::trail::{TrailId, TrailRecord};

/// Mutation contract for a trail collection.
///
/// Implementations must preserve insertion order and the unique-id
/// invariant: `insert` rejects a record whose id is already present, and
/// `remove` fails when the id is unknown.
#[cfg_attr(test, mockall::automock)]
pub trait TrailStore {
    /// Append a record, enforcing id uniqueness.
    fn insert(&mut self, record: TrailRecord) -> Result<(), CatalogueError>;

    /// Remove and return the record with the given id.
    fn remove(&mut self, id: &TrailId) -> Result<TrailRecord, CatalogueError>;

    /// All stored records in insertion order.
    fn records(&self) -> &[TrailRecord];
}
