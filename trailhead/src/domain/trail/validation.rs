//! Validation helpers shared by trail entity constructors.

use super::TrailValidationError;

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, TrailValidationError> {
    if value.trim().is_empty() {
        return Err(TrailValidationError::EmptyField { field });
    }
    Ok(value)
}

pub(super) fn ensure_valid_rating(
    rating: f32,
    field: &'static str,
) -> Result<(), TrailValidationError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(TrailValidationError::InvalidRating { field, rating });
    }
    Ok(())
}
