//! Error types for sample data construction.

use trailhead::domain::{CatalogueError, ProfileValidationError, TrailValidationError};

/// Errors raised while building or generating sample data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleDataError {
    /// A sample trail failed record validation.
    #[error(transparent)]
    Trail(#[from] TrailValidationError),
    /// The sample catalogue violated the unique-id invariant.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    /// The sample profile failed validation.
    #[error(transparent)]
    Profile(#[from] ProfileValidationError),
    /// A fixed calendar date was out of range.
    #[error("invalid sample date {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Calendar year.
        year: i32,
        /// Calendar month.
        month: u32,
        /// Day of month.
        day: u32,
    },
}
