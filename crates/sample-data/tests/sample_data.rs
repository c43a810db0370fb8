//! Integration tests for the sample data crate.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use rstest::rstest;
use sample_data::{generate_trails, sample_catalogue, sample_profile, sample_trails};
use trailhead::domain::Difficulty;

#[rstest]
fn sample_trails_match_the_browse_screen() {
    let trails = sample_trails().expect("fixed data is valid");

    let ids: Vec<&str> = trails.iter().map(|trail| trail.id().as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);

    let featured: Vec<&str> = trails
        .iter()
        .filter(|trail| trail.featured())
        .map(|trail| trail.name())
        .collect();
    assert_eq!(featured, ["Mount Rainier Summit", "Angel Falls Trail"]);
}

#[rstest]
fn sample_trails_carry_detail_screen_metadata() {
    let trails = sample_trails().expect("fixed data is valid");
    let rainier = trails.first().expect("four trails");

    assert_eq!(rainier.difficulty(), Difficulty::Hard);
    assert!(rainier.permission().is_required());
    assert!(rainier.camping().is_allowed());
    assert!(!rainier.water_available());
    assert_eq!(rainier.distance_from_user(), "2.3 hours drive");
}

#[rstest]
fn sample_catalogue_answers_the_browse_queries() {
    let mut catalogue = sample_catalogue().expect("fixed data is valid");

    assert_eq!(catalogue.len(), 4);
    assert_eq!(catalogue.search("venezuela").len(), 1);
    assert_eq!(catalogue.featured().len(), 1);

    let all = catalogue.search("");
    assert_eq!(all.len(), 4);
}

#[rstest]
fn sample_profile_matches_the_profile_screen() {
    let profile = sample_profile().expect("fixed data is valid");

    assert_eq!(profile.first_name(), "Sarah");
    assert_eq!(profile.last_name(), "Johnson");
    assert_eq!(profile.trails_visited(), 23);
    assert_eq!(profile.reviews_count(), 47);
    assert_eq!(profile.achievements().len(), 2);
}

#[rstest]
fn generation_is_deterministic() {
    let first = generate_trails(42, 8).expect("generation succeeds");
    let second = generate_trails(42, 8).expect("generation succeeds");

    assert_eq!(first, second);
}

#[rstest]
fn different_seeds_diverge() {
    let first = generate_trails(1, 8).expect("generation succeeds");
    let second = generate_trails(2, 8).expect("generation succeeds");

    assert_ne!(first, second);
}

#[rstest]
fn generated_trails_have_unique_ids() {
    let trails = generate_trails(7, 32).expect("generation succeeds");

    let ids: HashSet<&str> = trails.iter().map(|trail| trail.id().as_str()).collect();
    assert_eq!(ids.len(), trails.len());
}

#[rstest]
fn generated_trails_respect_count() {
    assert!(generate_trails(9, 0).expect("generation succeeds").is_empty());
    assert_eq!(generate_trails(9, 17).expect("generation succeeds").len(), 17);
}
