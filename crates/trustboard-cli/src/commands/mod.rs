// crates/trustboard-cli/src/commands/mod.rs
//
// Command module declarations for the Trustboard CLI.

pub mod claims;
pub mod deactivate;
pub mod influencer;
pub mod leaderboard;
pub mod settle;
pub mod stats;
pub mod submit;

use tabled::Tabled;

use trustboard_core::Claim;

use crate::output::{or_dash, truncate};

/// A row in the claim tables printed by `claims`, `submit` and `settle`.
#[derive(Tabled)]
pub struct ClaimRow {
    #[tabled(rename = "Claim ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Timestamp")]
    timestamp: String,
    #[tabled(rename = "Superseded By")]
    superseded_by: String,
    #[tabled(rename = "Statement")]
    statement: String,
}

impl From<&Claim> for ClaimRow {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            status: claim.status.to_string(),
            weight: format!("{:.2}", claim.weight),
            timestamp: claim.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            superseded_by: or_dash(claim.superseded_by),
            statement: claim
                .statement
                .as_deref()
                .map(|s| truncate(s, 48))
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}
