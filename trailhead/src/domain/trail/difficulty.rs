//! Trail difficulty grading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Difficulty grade shown on trail cards and selected on the submission form.
///
/// # Examples
///
/// ```
/// use trailhead::domain::Difficulty;
///
/// assert_eq!(Difficulty::default(), Difficulty::Easy);
/// assert_eq!(Difficulty::Hard.as_str(), "Hard");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Suitable for casual walkers.
    #[default]
    Easy,
    /// Requires reasonable fitness and preparation.
    Moderate,
    /// Demanding terrain; experience recommended.
    Hard,
}

impl Difficulty {
    /// Returns the display string used by the original client.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown difficulty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty grade: {}", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Easy" => Ok(Self::Easy),
            "Moderate" => Ok(Self::Moderate),
            "Hard" => Ok(Self::Hard),
            other => Err(UnknownDifficulty(other.to_owned())),
        }
    }
}
