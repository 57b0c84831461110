//! Campaign and prospect status enums.
//!
//! Both statuses are stored as plain lowercase strings. Labels written by other
//! workers in the pipeline that this crate does not act on are kept verbatim in
//! an `Other` variant so a record can be read and written back unchanged.
//!
//! Status enums provide `allowed_next_states()` to enforce the transitions this
//! worker is responsible for at the application layer.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CampaignStatus
// ---------------------------------------------------------------------------

/// Status of a campaign, as far as the analyst touches it.
///
/// ```text
/// analyzing → persuading   (no hunted prospects left)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignStatus {
    Analyzing,
    Persuading,
    Other(String),
}

impl CampaignStatus {
    #[must_use]
    pub const fn allowed_next_states(&self) -> &'static [Self] {
        match self {
            Self::Analyzing => &[Self::Persuading],
            Self::Persuading | Self::Other(_) => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(&self, next: &Self) -> bool {
        self.allowed_next_states().contains(next)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Analyzing => "analyzing",
            Self::Persuading => "persuading",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for CampaignStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "analyzing" => Self::Analyzing,
            "persuading" => Self::Persuading,
            _ => Self::Other(label),
        }
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProspectStatus
// ---------------------------------------------------------------------------

/// Qualification status of a prospect.
///
/// ```text
/// hunted → qualified
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProspectStatus {
    Hunted,
    Qualified,
    Other(String),
}

impl ProspectStatus {
    #[must_use]
    pub const fn allowed_next_states(&self) -> &'static [Self] {
        match self {
            Self::Hunted => &[Self::Qualified],
            Self::Qualified | Self::Other(_) => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(&self, next: &Self) -> bool {
        self.allowed_next_states().contains(next)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hunted => "hunted",
            Self::Qualified => "qualified",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ProspectStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "hunted" => Self::Hunted,
            "qualified" => Self::Qualified,
            _ => Self::Other(label),
        }
    }
}

impl From<ProspectStatus> for String {
    fn from(status: ProspectStatus) -> Self {
        match status {
            ProspectStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProspectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
