//! Trail submission form: draft state, validation, and hand-off.
//!
//! The form mirrors the "Add New Trail" screen: widgets push field edits as
//! the user types, nothing is validated until submit, and a failed submit
//! leaves every field untouched so the user can correct and retry. Only
//! the trail name and location are mandatory; the conditional detail
//! strings stay optional even when their toggle is on, exactly as in the
//! original client.

use std::fmt;

use tracing::info;

use super::catalogue::CatalogueError;
use super::ports::TrailStore;
use super::trail::{
    Camping, Difficulty, NearbyShops, Permission, TicketEntry, TrailId, TrailRecord,
    TrailRecordDraft, TrailValidationError, Wildlife,
};

#[cfg(test)]
mod tests;

/// Unvalidated, in-progress user input for a new trail record.
///
/// All fields default to empty string, `false`, or [`Difficulty::Easy`],
/// matching the form's initial state. Invalid intermediate states are
/// expected while the user is typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftTrail {
    /// Trail name text; mandatory at submit.
    pub name: String,
    /// Location text; mandatory at submit.
    pub location: String,
    /// Selected difficulty grade.
    pub difficulty: Difficulty,
    /// Free-form distance text.
    pub distance: String,
    /// Long-form description.
    pub description: String,
    /// Weather and season notes.
    pub weather_conditions: String,
    /// Wildlife toggle.
    pub wildlife_present: bool,
    /// Wildlife detail text, kept even while the toggle is off.
    pub wildlife_details: String,
    /// Permit toggle.
    pub permission_required: bool,
    /// Permit detail text.
    pub permission_details: String,
    /// Nearby shops toggle.
    pub nearby_shops: bool,
    /// Shop detail text.
    pub shop_details: String,
    /// Ticket toggle.
    pub ticket_required: bool,
    /// Ticket price text.
    pub ticket_price: String,
    /// Hazard notes.
    pub dangerous_spots: String,
    /// Drinking water toggle.
    pub water_available: bool,
    /// Camping toggle.
    pub camping_allowed: bool,
    /// Camping detail text.
    pub camping_details: String,
}

/// A single typed field edit delivered by an input widget.
///
/// The original client merged stringly-keyed updates into one flat state
/// object; a typed edit enum restores compile-time checking of field names
/// and value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Trail name text.
    Name(String),
    /// Location text.
    Location(String),
    /// Selected difficulty grade.
    Difficulty(Difficulty),
    /// Free-form distance text.
    Distance(String),
    /// Long-form description.
    Description(String),
    /// Weather and season notes.
    WeatherConditions(String),
    /// Wildlife toggle.
    WildlifePresent(bool),
    /// Wildlife detail text.
    WildlifeDetails(String),
    /// Permit toggle.
    PermissionRequired(bool),
    /// Permit detail text.
    PermissionDetails(String),
    /// Nearby shops toggle.
    NearbyShops(bool),
    /// Shop detail text.
    ShopDetails(String),
    /// Ticket toggle.
    TicketRequired(bool),
    /// Ticket price text.
    TicketPrice(String),
    /// Hazard notes.
    DangerousSpots(String),
    /// Drinking water toggle.
    WaterAvailable(bool),
    /// Camping toggle.
    CampingAllowed(bool),
    /// Camping detail text.
    CampingDetails(String),
}

/// Validation errors raised by [`TrailSubmissionForm::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// A mandatory field is empty once trimmed.
    EmptyField {
        /// Which field was empty (`"name"` or `"location"`).
        field: &'static str,
    },
    /// The assembled candidate failed record validation.
    ///
    /// Not reachable from the form's own field set (the form cannot
    /// produce an out-of-range rating), but kept total so record
    /// validation never needs a panicking escape hatch here.
    InvalidCandidate(TrailValidationError),
}

impl SubmissionError {
    /// The offending field tag, when the error names one.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmptyField { field } => Some(field),
            Self::InvalidCandidate(_) => None,
        }
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => {
                write!(f, "please fill in the trail {field}")
            }
            Self::InvalidCandidate(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl From<TrailValidationError> for SubmissionError {
    fn from(error: TrailValidationError) -> Self {
        match error {
            TrailValidationError::EmptyField { field } => Self::EmptyField { field },
            other => Self::InvalidCandidate(other),
        }
    }
}

/// Errors raised by [`TrailSubmissionForm::submit_into`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PublishError {
    /// The draft failed validation; the store was not touched.
    #[error(transparent)]
    Validation(#[from] SubmissionError),
    /// The store rejected the validated candidate.
    #[error(transparent)]
    Store(#[from] CatalogueError),
}

/// Mutable submission form for a new trail.
///
/// State machine: editing → (validated-submitted | validation-failed,
/// still editing). After a successful submit the draft resets to its
/// defaults; after a failed one it is preserved verbatim.
#[derive(Debug, Clone, Default)]
pub struct TrailSubmissionForm {
    draft: DraftTrail,
}

impl TrailSubmissionForm {
    /// A form with all fields at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft state.
    pub const fn draft(&self) -> &DraftTrail {
        &self.draft
    }

    /// Apply a single field edit. No validation happens here.
    pub fn set_field(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => self.draft.name = value,
            FieldEdit::Location(value) => self.draft.location = value,
            FieldEdit::Difficulty(value) => self.draft.difficulty = value,
            FieldEdit::Distance(value) => self.draft.distance = value,
            FieldEdit::Description(value) => self.draft.description = value,
            FieldEdit::WeatherConditions(value) => self.draft.weather_conditions = value,
            FieldEdit::WildlifePresent(value) => self.draft.wildlife_present = value,
            FieldEdit::WildlifeDetails(value) => self.draft.wildlife_details = value,
            FieldEdit::PermissionRequired(value) => self.draft.permission_required = value,
            FieldEdit::PermissionDetails(value) => self.draft.permission_details = value,
            FieldEdit::NearbyShops(value) => self.draft.nearby_shops = value,
            FieldEdit::ShopDetails(value) => self.draft.shop_details = value,
            FieldEdit::TicketRequired(value) => self.draft.ticket_required = value,
            FieldEdit::TicketPrice(value) => self.draft.ticket_price = value,
            FieldEdit::DangerousSpots(value) => self.draft.dangerous_spots = value,
            FieldEdit::WaterAvailable(value) => self.draft.water_available = value,
            FieldEdit::CampingAllowed(value) => self.draft.camping_allowed = value,
            FieldEdit::CampingDetails(value) => self.draft.camping_details = value,
        }
    }

    /// Validate the draft and produce a publishable candidate record.
    ///
    /// The name is checked before the location, each trimmed. On success
    /// the candidate carries a fresh random id, a zero rating and review
    /// count, and is not featured; the draft then resets to its defaults.
    /// On failure the draft is left untouched.
    pub fn submit(&mut self) -> Result<TrailRecord, SubmissionError> {
        let record = self.build_candidate()?;
        self.draft = DraftTrail::default();
        info!(id = %record.id(), name = record.name(), "trail submission accepted");
        Ok(record)
    }

    /// Validate the draft and hand the candidate to a [`TrailStore`].
    ///
    /// The draft resets only once the store accepts the record, so both a
    /// validation failure and a store rejection preserve the user's input.
    pub fn submit_into<S: TrailStore>(&mut self, store: &mut S) -> Result<TrailId, PublishError> {
        let record = self.build_candidate()?;
        let id = record.id().clone();
        store.insert(record)?;
        self.draft = DraftTrail::default();
        info!(id = %id, "trail submission published");
        Ok(id)
    }

    fn build_candidate(&self) -> Result<TrailRecord, SubmissionError> {
        let draft = &self.draft;
        let candidate = TrailRecordDraft {
            id: TrailId::random(),
            name: draft.name.clone(),
            location: draft.location.clone(),
            difficulty: draft.difficulty,
            rating: 0.0,
            review_count: 0,
            distance: draft.distance.clone(),
            image: String::new(),
            featured: false,
            description: draft.description.clone(),
            weather_conditions: draft.weather_conditions.clone(),
            wildlife: Wildlife::from_flag(draft.wildlife_present, draft.wildlife_details.clone()),
            permission: Permission::from_flag(
                draft.permission_required,
                draft.permission_details.clone(),
            ),
            shops: NearbyShops::from_flag(draft.nearby_shops, draft.shop_details.clone()),
            ticket: TicketEntry::from_flag(draft.ticket_required, draft.ticket_price.clone()),
            dangerous_spots: draft.dangerous_spots.clone(),
            water_available: draft.water_available,
            camping: Camping::from_flag(draft.camping_allowed, draft.camping_details.clone()),
            distance_from_user: String::new(),
            added_by: None,
            added_date: None,
            coordinates: None,
        };
        TrailRecord::new(candidate).map_err(SubmissionError::from)
    }
}
