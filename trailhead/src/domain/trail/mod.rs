//! Trail entity and its validated construction.
//!
//! A [`TrailRecord`] is immutable once published into a catalogue. Callers
//! build records from a [`TrailRecordDraft`] so that every published record
//! satisfies the documented invariants.

use std::fmt;

mod conditions;
mod difficulty;
mod record;
mod validation;

#[cfg(test)]
mod tests;

pub use conditions::{Camping, NearbyShops, Permission, TicketEntry, Wildlife};
pub use difficulty::{Difficulty, UnknownDifficulty};
pub use record::{Coordinates, TrailId, TrailRecord, TrailRecordDraft};

/// Validation errors returned by trail entity constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum TrailValidationError {
    /// A required display field is empty once trimmed.
    EmptyField {
        /// Which field was empty.
        field: &'static str,
    },
    /// The rating falls outside `[0.0, 5.0]`.
    InvalidRating {
        /// Which field carried the rating.
        field: &'static str,
        /// The offending value.
        rating: f32,
    },
}

impl fmt::Display for TrailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidRating { field, rating } => {
                write!(f, "{field} must be between 0.0 and 5.0 (got {rating})")
            }
        }
    }
}

impl std::error::Error for TrailValidationError {}
