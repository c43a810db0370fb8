//! Conditional trail metadata.
//!
//! The original client stored each of these as an independent boolean plus a
//! detail string, which permits details without the toggle. Each pair is
//! remodelled here as a tagged variant so the inconsistent state is
//! unrepresentable. Detail strings may still be empty in the "on" variant:
//! the submission form deliberately does not require them.

use serde::{Deserialize, Serialize};

/// Wildlife presence along the trail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Wildlife {
    /// No notable wildlife reported.
    #[default]
    Absent,
    /// Wild animals are present in the area.
    Present {
        /// Species and precautions, possibly empty.
        details: String,
    },
}

impl Wildlife {
    /// Fold the source's bool + detail pair into a variant.
    pub fn from_flag(present: bool, details: String) -> Self {
        if present { Self::Present { details } } else { Self::Absent }
    }

    /// Whether wildlife is reported.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    /// Detail text, when wildlife is present.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Present { details } => Some(details.as_str()),
        }
    }
}

/// Access permission requirements for the trail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Permission {
    /// Open access, no permit needed.
    #[default]
    NotRequired,
    /// A permit or permission is required before hiking.
    Required {
        /// How to obtain it, possibly empty.
        details: String,
    },
}

impl Permission {
    /// Fold the source's bool + detail pair into a variant.
    pub fn from_flag(required: bool, details: String) -> Self {
        if required { Self::Required { details } } else { Self::NotRequired }
    }

    /// Whether a permit is required.
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Required { .. })
    }

    /// Detail text, when a permit is required.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::NotRequired => None,
            Self::Required { details } => Some(details.as_str()),
        }
    }
}

/// Availability of shops near the trailhead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum NearbyShops {
    /// No shops near the trailhead.
    #[default]
    Absent,
    /// Shops are available nearby.
    Available {
        /// What is stocked and where, possibly empty.
        details: String,
    },
}

impl NearbyShops {
    /// Fold the source's bool + detail pair into a variant.
    pub fn from_flag(available: bool, details: String) -> Self {
        if available { Self::Available { details } } else { Self::Absent }
    }

    /// Whether shops are available.
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// Detail text, when shops are available.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Available { details } => Some(details.as_str()),
        }
    }
}

/// Ticket or entrance-fee requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TicketEntry {
    /// Free entry.
    #[default]
    NotRequired,
    /// A ticket must be purchased.
    Required {
        /// Display price text, possibly empty.
        price: String,
    },
}

impl TicketEntry {
    /// Fold the source's bool + price pair into a variant.
    pub fn from_flag(required: bool, price: String) -> Self {
        if required { Self::Required { price } } else { Self::NotRequired }
    }

    /// Whether a ticket is required.
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Required { .. })
    }

    /// Price text, when a ticket is required.
    pub fn price(&self) -> Option<&str> {
        match self {
            Self::NotRequired => None,
            Self::Required { price } => Some(price.as_str()),
        }
    }
}

/// Camping policy along the trail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Camping {
    /// Camping is not permitted.
    #[default]
    NotAllowed,
    /// Camping is permitted.
    Allowed {
        /// Site rules and reservations, possibly empty.
        details: String,
    },
}

impl Camping {
    /// Fold the source's bool + detail pair into a variant.
    pub fn from_flag(allowed: bool, details: String) -> Self {
        if allowed { Self::Allowed { details } } else { Self::NotAllowed }
    }

    /// Whether camping is permitted.
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Detail text, when camping is permitted.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::NotAllowed => None,
            Self::Allowed { details } => Some(details.as_str()),
        }
    }
}
