use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a complaint.
///
/// Variants are declared in lifecycle order, so the derived `Ord` matches
/// progression: `Submitted < UnderReview < Assigned < Resolved`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum ComplaintStatus {
    #[default]
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    Assigned,
    Resolved,
}

impl ComplaintStatus {
    /// All stages in lifecycle order
    pub const ORDER: [ComplaintStatus; 4] = [
        ComplaintStatus::Submitted,
        ComplaintStatus::UnderReview,
        ComplaintStatus::Assigned,
        ComplaintStatus::Resolved,
    ];

    /// Display label, identical to the persisted tag
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "Submitted",
            ComplaintStatus::UnderReview => "Under Review",
            ComplaintStatus::Assigned => "Assigned",
            ComplaintStatus::Resolved => "Resolved",
        }
    }

    /// Zero-based position in [`ComplaintStatus::ORDER`]
    pub fn position(&self) -> usize {
        match self {
            ComplaintStatus::Submitted => 0,
            ComplaintStatus::UnderReview => 1,
            ComplaintStatus::Assigned => 2,
            ComplaintStatus::Resolved => 3,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ComplaintStatus::Resolved)
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a raw status tag is not one of the four lifecycle labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid complaint status: {value:?}")]
pub struct InvalidStatus {
    pub value: String,
}

impl FromStr for ComplaintStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplaintStatus::ORDER
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| InvalidStatus {
                value: s.to_string(),
            })
    }
}
