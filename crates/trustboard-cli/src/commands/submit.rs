// crates/trustboard-cli/src/commands/submit.rs
//
// `trustboard submit` — submit a claim for an influencer.

use chrono::{DateTime, Utc};
use clap::Args;
use uuid::Uuid;

use trustboard_core::{Category, ClaimStatus, InfluencerId, InfluencerProfile};
use trustboard_service::{ClaimReceipt, ClaimSubmission};

use crate::commands::ClaimRow;
use crate::http_client::TrustboardClient;
use crate::output::{format_json, format_table, OutputFormat};

/// Claim submission command.
#[derive(Debug, Args)]
pub struct SubmitCmd {
    /// Influencer the claim is attributed to.
    #[arg(long)]
    pub influencer: u64,

    /// Claim weight (non-negative).
    #[arg(long, default_value = "1.0")]
    pub weight: f64,

    /// verified, refuted or unverified.
    #[arg(long, default_value = "unverified")]
    pub status: ClaimStatus,

    /// When the claim was made (RFC 3339); defaults to now.
    #[arg(long)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Prior claim this one corrects.
    #[arg(long)]
    pub supersedes: Option<Uuid>,

    /// Text of the claim.
    #[arg(long)]
    pub statement: Option<String>,

    /// Display name, used if this claim creates the influencer.
    #[arg(long)]
    pub name: Option<String>,

    /// Category, used if this claim creates the influencer.
    #[arg(long)]
    pub category: Option<Category>,

    /// Follower count, used if this claim creates the influencer.
    #[arg(long)]
    pub followers: Option<u64>,
}

impl SubmitCmd {
    fn to_submission(&self) -> ClaimSubmission {
        let mut submission =
            ClaimSubmission::new(InfluencerId(self.influencer), self.weight).with_status(self.status);
        if let Some(ts) = self.timestamp {
            submission = submission.with_timestamp(ts);
        }
        if let Some(prior) = self.supersedes {
            submission = submission.superseding(prior);
        }
        submission.statement = self.statement.clone();
        if self.name.is_some() || self.category.is_some() || self.followers.is_some() {
            submission = submission.with_profile(InfluencerProfile {
                name: self.name.clone(),
                category: self.category.clone(),
                followers: self.followers,
            });
        }
        submission
    }
}

/// Run the submit command.
pub async fn run(
    client: &TrustboardClient,
    format: &OutputFormat,
    cmd: &SubmitCmd,
) -> Result<(), Box<dyn std::error::Error>> {
    let receipt: ClaimReceipt = client.post("/claims", &cmd.to_submission()).await?;
    print_receipt(format, &receipt, "Claim accepted");
    Ok(())
}

/// Print a claim receipt in the chosen format.
pub fn print_receipt(format: &OutputFormat, receipt: &ClaimReceipt, heading: &str) {
    if *format == OutputFormat::Json {
        println!("{}", format_json(receipt));
        return;
    }
    println!("{}", heading);
    if receipt.created_influencer {
        println!("  New influencer:  {}", receipt.influencer_id);
    } else {
        println!("  Influencer:      {}", receipt.influencer_id);
    }
    println!("  Trust score:     {}", receipt.trust_score);
    println!("  Verified claims: {}", receipt.verified_claims);
    println!();
    println!("{}", format_table(&[ClaimRow::from(&receipt.claim)]));
}
