//! Unit tests for trail entity construction.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::rstest;

use super::*;

fn record_draft() -> TrailRecordDraft {
    TrailRecordDraft {
        id: TrailId::new("1").expect("valid id"),
        name: "Mount Rainier Summit".to_owned(),
        location: "Washington, USA".to_owned(),
        difficulty: Difficulty::Hard,
        rating: 4.8,
        review_count: 234,
        distance: "14.4 mi".to_owned(),
        image: "https://example.test/rainier.jpeg".to_owned(),
        featured: true,
        description: "A challenging but rewarding climb.".to_owned(),
        weather_conditions: "Best visited June-September.".to_owned(),
        wildlife: Wildlife::Present {
            details: "Black bears and marmots.".to_owned(),
        },
        permission: Permission::Required {
            details: "Climbing permit required.".to_owned(),
        },
        shops: NearbyShops::Absent,
        ticket: TicketEntry::Required {
            price: "$30 park entrance fee".to_owned(),
        },
        dangerous_spots: "Steep ice fields above 10,000 ft.".to_owned(),
        water_available: false,
        camping: Camping::Allowed {
            details: "Designated sites only.".to_owned(),
        },
        distance_from_user: "2.3 hours drive".to_owned(),
        added_by: None,
        added_date: None,
        coordinates: None,
    }
}

#[rstest]
fn record_new_accepts_valid_draft() {
    let record = TrailRecord::new(record_draft()).expect("valid record");

    assert_eq!(record.name(), "Mount Rainier Summit");
    assert_eq!(record.difficulty(), Difficulty::Hard);
    assert!(record.featured());
    assert!(record.permission().is_required());
}

#[rstest]
#[case("")]
#[case("   ")]
fn record_rejects_blank_name(#[case] name: &str) {
    let mut draft = record_draft();
    draft.name = name.to_owned();

    let result = TrailRecord::new(draft);

    assert!(matches!(
        result,
        Err(TrailValidationError::EmptyField { field: "name" })
    ));
}

#[rstest]
fn record_rejects_blank_location() {
    let mut draft = record_draft();
    draft.location = " \t".to_owned();

    let result = TrailRecord::new(draft);

    assert!(matches!(
        result,
        Err(TrailValidationError::EmptyField { field: "location" })
    ));
}

#[rstest]
#[case(5.1)]
#[case(-0.1)]
fn record_rejects_out_of_range_rating(#[case] rating: f32) {
    let mut draft = record_draft();
    draft.rating = rating;

    let result = TrailRecord::new(draft);

    assert!(matches!(
        result,
        Err(TrailValidationError::InvalidRating { field: "rating", .. })
    ));
}

#[rstest]
fn record_accepts_rating_bounds() {
    for rating in [0.0, 5.0] {
        let mut draft = record_draft();
        draft.rating = rating;
        TrailRecord::new(draft).expect("boundary ratings are valid");
    }
}

#[rstest]
fn trail_id_rejects_blank_input() {
    assert!(matches!(
        TrailId::new("  "),
        Err(TrailValidationError::EmptyField { field: "id" })
    ));
}

#[rstest]
fn trail_id_random_is_unique() {
    assert_ne!(TrailId::random(), TrailId::random());
}

#[rstest]
fn difficulty_round_trips_through_display() {
    for grade in [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard] {
        let parsed: Difficulty = grade.as_str().parse().expect("display form parses");
        assert_eq!(parsed, grade);
    }
}

#[rstest]
fn difficulty_rejects_unknown_grade() {
    let result: Result<Difficulty, _> = "Extreme".parse();
    assert_eq!(result, Err(UnknownDifficulty("Extreme".to_owned())));
}

#[rstest]
fn conditions_fold_flag_pairs() {
    assert_eq!(
        Permission::from_flag(false, "ignored".to_owned()),
        Permission::NotRequired
    );
    assert_eq!(
        Camping::from_flag(true, String::new()),
        Camping::Allowed {
            details: String::new()
        }
    );
    assert_eq!(
        TicketEntry::from_flag(true, "$30".to_owned()).price(),
        Some("$30")
    );
}

#[rstest]
fn record_deserialisation_enforces_validation() {
    let record = TrailRecord::new(record_draft()).expect("valid record");
    let mut value = serde_json::to_value(&record).expect("serialises");

    if let Some(name) = value.get_mut("name") {
        *name = serde_json::Value::String("  ".to_owned());
    }

    let result: Result<TrailRecord, _> = serde_json::from_value(value);
    assert!(result.is_err());
}
