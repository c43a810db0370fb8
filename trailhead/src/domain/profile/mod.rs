//! User profile data model.
//!
//! The profile screen renders a user's identity, hiking stats, and
//! achievement badges. Like trail records, profiles are validated at
//! construction and immutable afterwards.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;


/// Validation errors returned by profile constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    /// A required display field is empty once trimmed.
    EmptyField {
        /// Which field was empty.
        field: &'static str,
    },
    /// The email address is not plausibly formed.
    InvalidEmail,
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain an @ sign"),
        }
    }
}

impl std::error::Error for ProfileValidationError {}

/// An unlocked achievement badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Achievement {
    /// Badge identifier.
    pub id: Uuid,
    /// Badge title, e.g. `"Trail Blazer"`.
    pub name: String,
    /// Short description of how it was earned.
    pub description: String,
    /// Icon key rendered by the client.
    pub icon: String,
    /// When the badge was unlocked.
    pub unlocked_date: NaiveDate,
}

/// Input payload for [`UserProfile::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserProfileDraft {
    /// Stable user identifier.
    pub id: Uuid,
    /// Contact email address; must contain an `@` sign.
    pub email: String,
    /// Given name; must be non-empty once trimmed.
    pub first_name: String,
    /// Family name; must be non-empty once trimmed.
    pub last_name: String,
    /// Avatar URL, when set.
    pub avatar: Option<String>,
    /// Number of trails the user has visited.
    pub trails_visited: u32,
    /// Number of reviews the user has written.
    pub reviews_count: u32,
    /// Unlocked achievement badges; each needs a non-empty name.
    pub achievements: Vec<Achievement>,
    /// Date the account was created.
    pub join_date: NaiveDate,
}

/// A validated user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UserProfile {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    avatar: Option<String>,
    trails_visited: u32,
    reviews_count: u32,
    achievements: Vec<Achievement>,
    join_date: NaiveDate,
}

impl UserProfile {
    /// Validate and construct a profile.
    pub fn new(draft: UserProfileDraft) -> Result<Self, ProfileValidationError> {
        Self::try_from(draft)
    }

    /// Stable user identifier.
    pub const fn id(&self) -> Uuid {
        self.id
    }
    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }
    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }
    /// Avatar URL, when set.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
    /// Number of trails the user has visited.
    pub const fn trails_visited(&self) -> u32 {
        self.trails_visited
    }
    /// Number of reviews the user has written.
    pub const fn reviews_count(&self) -> u32 {
        self.reviews_count
    }
    /// Unlocked achievement badges.
    pub fn achievements(&self) -> &[Achievement] {
        self.achievements.as_slice()
    }
    /// Date the account was created.
    pub const fn join_date(&self) -> NaiveDate {
        self.join_date
    }
}

impl TryFrom<UserProfileDraft> for UserProfile {
    type Error = ProfileValidationError;

    fn try_from(draft: UserProfileDraft) -> Result<Self, Self::Error> {
        if draft.email.trim().is_empty() {
            return Err(ProfileValidationError::EmptyField { field: "email" });
        }
        if !draft.email.contains('@') {
            return Err(ProfileValidationError::InvalidEmail);
        }
        if draft.first_name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyField { field: "first_name" });
        }
        if draft.last_name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyField { field: "last_name" });
        }
        for achievement in &draft.achievements {
            if achievement.name.trim().is_empty() {
                return Err(ProfileValidationError::EmptyField {
                    field: "achievement.name",
                });
            }
        }

        Ok(Self {
            id: draft.id,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            avatar: draft.avatar,
            trails_visited: draft.trails_visited,
            reviews_count: draft.reviews_count,
            achievements: draft.achievements,
            join_date: draft.join_date,
        })
    }
}

impl<'de> Deserialize<'de> for UserProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        UserProfileDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
