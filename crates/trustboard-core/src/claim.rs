// crates/trustboard-core/src/claim.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::influencer::InfluencerId;

/// Claim identifier (UUID v7 when assigned by the service).
pub type ClaimId = Uuid;

/// Verification status of a claim.
///
///   Unverified --> Verified   (settled, immutable)
///        |
///        +-----> Refuted    (settled, immutable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Unverified,
    Verified,
    Refuted,
}

impl ClaimStatus {
    /// Settled claims can no longer change status.
    pub fn is_settled(self) -> bool {
        !matches!(self, ClaimStatus::Unverified)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClaimStatus::Unverified => "unverified",
            ClaimStatus::Verified => "verified",
            ClaimStatus::Refuted => "refuted",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unverified" => Ok(ClaimStatus::Unverified),
            "verified" => Ok(ClaimStatus::Verified),
            "refuted" => Ok(ClaimStatus::Refuted),
            other => Err(format!("unknown claim status: {}", other)),
        }
    }
}

/// A claim attributed to an influencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub influencer_id: InfluencerId,
    pub status: ClaimStatus,
    /// When the claim was made by the influencer.
    pub timestamp: DateTime<Utc>,
    /// Relative importance of the claim in score computation.
    pub weight: f64,
    /// Prior claim this one corrects, if any.
    #[serde(default)]
    pub supersedes: Option<ClaimId>,
    /// Id of the claim that corrected this one, if any.
    #[serde(default)]
    pub superseded_by: Option<ClaimId>,
    /// Free-text statement of the claim.
    #[serde(default)]
    pub statement: Option<String>,
    /// When the service accepted the claim.
    pub recorded_at: DateTime<Utc>,
}

impl Claim {
    /// A claim participates in scoring until a correction supersedes it.
    pub fn is_effective(&self) -> bool {
        self.superseded_by.is_none()
    }

    /// Effective claim with status verified.
    pub fn counts_as_verified(&self) -> bool {
        self.is_effective() && self.status == ClaimStatus::Verified
    }
}
