//! Deterministic trail generation.
//!
//! Pads a demo catalogue with believable extra trails. The RNG is seeded
//! explicitly, so the same seed and count always produce identical records.

use fake::Fake;
use fake::faker::address::raw::{CityName, StateName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trailhead::domain::{
    Camping, Difficulty, NearbyShops, Permission, TicketEntry, TrailId, TrailRecord,
    TrailRecordDraft, Wildlife,
};
use uuid::Uuid;

use crate::error::SampleDataError;

/// Landmark words appended to a generated place name.
const TRAIL_FEATURES: &[&str] = &[
    "Ridge", "Falls", "Loop", "Summit", "Canyon", "Traverse", "Lakes", "Pass",
];

/// Probability that a generated trail is featured.
const FEATURED_PROBABILITY: f64 = 0.25;

/// Generate `count` trails deterministically from `seed`.
///
/// Generated records satisfy every [`TrailRecord`] invariant: ratings fall
/// in `[3.0, 5.0]` and names/locations are never empty.
///
/// # Errors
///
/// Returns [`SampleDataError::Trail`] if a generated draft fails record
/// validation, which would indicate a bug in the generator itself.
pub fn generate_trails(seed: u64, count: usize) -> Result<Vec<TrailRecord>, SampleDataError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| generate_single_trail(&mut rng)).collect()
}

fn generate_single_trail(rng: &mut ChaCha8Rng) -> Result<TrailRecord, SampleDataError> {
    // Deterministic UUID derived from the seeded RNG.
    let id = TrailId::new(Uuid::from_u128(rng.random()).to_string())?;

    let city: String = CityName(EN).fake_with_rng(rng);
    let state: String = StateName(EN).fake_with_rng(rng);
    let feature = TRAIL_FEATURES.choose(rng).copied().unwrap_or("Trail");

    let difficulty = match rng.random_range(0_u8..3) {
        0 => Difficulty::Easy,
        1 => Difficulty::Moderate,
        _ => Difficulty::Hard,
    };

    let draft = TrailRecordDraft {
        id,
        name: format!("{city} {feature}"),
        location: format!("{state}, USA"),
        difficulty,
        rating: rng.random_range(3.0_f32..=5.0),
        review_count: rng.random_range(5..=500),
        distance: format!("{:.1} mi", rng.random_range(1.0_f32..=60.0)),
        image: String::new(),
        featured: rng.random_bool(FEATURED_PROBABILITY),
        description: String::new(),
        weather_conditions: String::new(),
        wildlife: Wildlife::from_flag(rng.random_bool(0.5), String::new()),
        permission: Permission::NotRequired,
        shops: NearbyShops::Absent,
        ticket: TicketEntry::NotRequired,
        dangerous_spots: String::new(),
        water_available: rng.random_bool(0.5),
        camping: Camping::NotAllowed,
        distance_from_user: String::new(),
        added_by: None,
        added_date: None,
        coordinates: None,
    };

    TrailRecord::new(draft).map_err(SampleDataError::from)
}
