//! Trail record entity.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TrailValidationError;
use super::conditions::{Camping, NearbyShops, Permission, TicketEntry, Wildlife};
use super::difficulty::Difficulty;
use super::validation::{ensure_valid_rating, validate_non_empty_field};

/// Stable trail identifier.
///
/// Catalogue seed data uses short numeric strings; submissions mint
/// UUID-backed identifiers via [`TrailId::random`]. Either way the id must
/// be non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrailId(String);

impl TrailId {
    /// Validate and construct a [`TrailId`].
    pub fn new(id: impl Into<String>) -> Result<Self, TrailValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TrailValidationError::EmptyField { field: "id" });
        }
        Ok(Self(id))
    }

    /// Mint a new random identifier for a submitted trail.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for TrailId {
    type Error = TrailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TrailId> for String {
    fn from(value: TrailId) -> Self {
        value.0
    }
}

impl AsRef<str> for TrailId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TrailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trailhead coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Input payload for [`TrailRecord::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TrailRecordDraft {
    /// Stable identifier, unique within a catalogue.
    pub id: TrailId,
    /// Display name; must be non-empty once trimmed.
    pub name: String,
    /// Display location; must be non-empty once trimmed.
    pub location: String,
    /// Difficulty grade.
    pub difficulty: Difficulty,
    /// Average rating; must lie in `[0.0, 5.0]`.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Free-form trail length text.
    pub distance: String,
    /// Hero image URL, possibly empty.
    pub image: String,
    /// Whether the trail belongs to the curated featured subset.
    pub featured: bool,
    /// Long-form description.
    pub description: String,
    /// Typical weather and season notes.
    pub weather_conditions: String,
    /// Wildlife presence.
    pub wildlife: Wildlife,
    /// Permit requirements.
    pub permission: Permission,
    /// Nearby shop availability.
    pub shops: NearbyShops,
    /// Ticket requirements.
    pub ticket: TicketEntry,
    /// Hazard notes.
    pub dangerous_spots: String,
    /// Whether drinking water is available on the trail.
    pub water_available: bool,
    /// Camping policy.
    pub camping: Camping,
    /// Travel-time text from the user's location, possibly empty.
    pub distance_from_user: String,
    /// Display name of the contributor, when known.
    pub added_by: Option<String>,
    /// Date the trail was added, when known.
    pub added_date: Option<NaiveDate>,
    /// Trailhead coordinates, when known.
    pub coordinates: Option<Coordinates>,
}

/// A published hiking-spot entity with descriptive and safety metadata.
///
/// Immutable once constructed. `name` and `location` are non-empty,
/// `rating` lies in `[0.0, 5.0]`, and `review_count` is non-negative by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TrailRecord {
    id: TrailId,
    name: String,
    location: String,
    difficulty: Difficulty,
    rating: f32,
    review_count: u32,
    distance: String,
    image: String,
    featured: bool,
    description: String,
    weather_conditions: String,
    wildlife: Wildlife,
    permission: Permission,
    shops: NearbyShops,
    ticket: TicketEntry,
    dangerous_spots: String,
    water_available: bool,
    camping: Camping,
    distance_from_user: String,
    added_by: Option<String>,
    added_date: Option<NaiveDate>,
    coordinates: Option<Coordinates>,
}

impl TrailRecord {
    /// Validate and construct a trail record.
    pub fn new(draft: TrailRecordDraft) -> Result<Self, TrailValidationError> {
        Self::try_from(draft)
    }

    /// Stable identifier, unique within a catalogue.
    pub fn id(&self) -> &TrailId {
        &self.id
    }
    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    /// Display location, e.g. `"Washington, USA"`.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }
    /// Difficulty grade.
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    /// Average rating in `[0.0, 5.0]`.
    pub const fn rating(&self) -> f32 {
        self.rating
    }
    /// Number of reviews behind the rating.
    pub const fn review_count(&self) -> u32 {
        self.review_count
    }
    /// Free-form trail length text (unit-ambiguous in the source data).
    pub fn distance(&self) -> &str {
        self.distance.as_str()
    }
    /// Hero image URL, possibly empty for submitted candidates.
    pub fn image(&self) -> &str {
        self.image.as_str()
    }
    /// Whether the trail belongs to the curated featured subset.
    pub const fn featured(&self) -> bool {
        self.featured
    }
    /// Long-form description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    /// Typical weather and season notes.
    pub fn weather_conditions(&self) -> &str {
        self.weather_conditions.as_str()
    }
    /// Wildlife presence.
    pub const fn wildlife(&self) -> &Wildlife {
        &self.wildlife
    }
    /// Permit requirements.
    pub const fn permission(&self) -> &Permission {
        &self.permission
    }
    /// Nearby shop availability.
    pub const fn shops(&self) -> &NearbyShops {
        &self.shops
    }
    /// Ticket requirements.
    pub const fn ticket(&self) -> &TicketEntry {
        &self.ticket
    }
    /// Hazard notes.
    pub fn dangerous_spots(&self) -> &str {
        self.dangerous_spots.as_str()
    }
    /// Whether drinking water is available on the trail.
    pub const fn water_available(&self) -> bool {
        self.water_available
    }
    /// Camping policy.
    pub const fn camping(&self) -> &Camping {
        &self.camping
    }
    /// Travel-time text from the user's location, possibly empty.
    pub fn distance_from_user(&self) -> &str {
        self.distance_from_user.as_str()
    }
    /// Display name of the contributor, when known.
    pub fn added_by(&self) -> Option<&str> {
        self.added_by.as_deref()
    }
    /// Date the trail was added, when known.
    pub const fn added_date(&self) -> Option<NaiveDate> {
        self.added_date
    }
    /// Trailhead coordinates, when known.
    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }
}

impl TryFrom<TrailRecordDraft> for TrailRecord {
    type Error = TrailValidationError;

    fn try_from(draft: TrailRecordDraft) -> Result<Self, Self::Error> {
        let name = validate_non_empty_field(draft.name, "name")?;
        let location = validate_non_empty_field(draft.location, "location")?;
        ensure_valid_rating(draft.rating, "rating")?;

        Ok(Self {
            id: draft.id,
            name,
            location,
            difficulty: draft.difficulty,
            rating: draft.rating,
            review_count: draft.review_count,
            distance: draft.distance,
            image: draft.image,
            featured: draft.featured,
            description: draft.description,
            weather_conditions: draft.weather_conditions,
            wildlife: draft.wildlife,
            permission: draft.permission,
            shops: draft.shops,
            ticket: draft.ticket,
            dangerous_spots: draft.dangerous_spots,
            water_available: draft.water_available,
            camping: draft.camping,
            distance_from_user: draft.distance_from_user,
            added_by: draft.added_by,
            added_date: draft.added_date,
            coordinates: draft.coordinates,
        })
    }
}

impl<'de> Deserialize<'de> for TrailRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        TrailRecordDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
