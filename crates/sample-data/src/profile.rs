//! The profile screen's mock user.

use chrono::NaiveDate;
use trailhead::domain::{Achievement, UserProfile, UserProfileDraft};
use uuid::Uuid;

use crate::error::SampleDataError;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SampleDataError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(SampleDataError::InvalidDate { year, month, day })
}

/// The mock user rendered by the profile screen.
///
/// # Errors
///
/// Fails with [`SampleDataError::Profile`] if the fixed data no longer
/// satisfies profile validation.
pub fn sample_profile() -> Result<UserProfile, SampleDataError> {
    let profile = UserProfile::new(UserProfileDraft {
        id: Uuid::from_u128(0x01),
        email: "sarah.johnson@email.com".to_owned(),
        first_name: "Sarah".to_owned(),
        last_name: "Johnson".to_owned(),
        avatar: Some(
            "https://images.pexels.com/photos/1040880/pexels-photo-1040880.jpeg".to_owned(),
        ),
        trails_visited: 23,
        reviews_count: 47,
        achievements: vec![
            Achievement {
                id: Uuid::from_u128(0x02),
                name: "Trail Blazer".to_owned(),
                description: "Visited 20+ trails".to_owned(),
                icon: "trophy".to_owned(),
                unlocked_date: date(2024, 5, 18)?,
            },
            Achievement {
                id: Uuid::from_u128(0x03),
                name: "Top Reviewer".to_owned(),
                description: "40+ helpful reviews".to_owned(),
                icon: "star".to_owned(),
                unlocked_date: date(2024, 11, 2)?,
            },
        ],
        join_date: date(2023, 3, 12)?,
    })?;
    Ok(profile)
}
