//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed entities and services behind the
//! trail-discovery screens. Types are immutable once validated; each
//! type's Rustdoc documents its invariants and serde contract.
//!
//! Public surface:
//! - [`TrailRecord`] / [`TrailRecordDraft`] — published trail entity and
//!   its unvalidated input payload.
//! - [`TrailCatalogue`] — ordered in-memory collection answering search,
//!   featured, and id lookups.
//! - [`TrailSubmissionForm`] — draft state and validation for the
//!   "add new trail" flow.
//! - [`TrailStore`] — mutation contract for persisting collaborators.
//! - [`UserProfile`] — profile screen data model.

pub mod catalogue;
pub mod ports;
pub mod profile;
pub mod submission;
pub mod trail;

pub use self::catalogue::{CatalogueError, TrailCatalogue};
pub use self::ports::TrailStore;
pub use self::profile::{Achievement, ProfileValidationError, UserProfile, UserProfileDraft};
pub use self::submission::{
    DraftTrail, FieldEdit, PublishError, SubmissionError, TrailSubmissionForm,
};
pub use self::trail::{
    Camping, Coordinates, Difficulty, NearbyShops, Permission, TicketEntry, TrailId, TrailRecord,
    TrailRecordDraft, TrailValidationError, UnknownDifficulty, Wildlife,
};
