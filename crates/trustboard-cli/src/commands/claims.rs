// crates/trustboard-cli/src/commands/claims.rs
//
// `trustboard claims <id>` — list an influencer's claims.

use clap::Args;

use trustboard_rpc::handlers::influencer::ListClaimsResponse;

use crate::commands::ClaimRow;
use crate::http_client::TrustboardClient;
use crate::output::{format_json, format_table, OutputFormat};

/// Claim listing command.
#[derive(Debug, Args)]
pub struct ClaimsCmd {
    /// Numeric influencer id.
    pub id: u64,
}

/// Run the claims command.
pub async fn run(
    client: &TrustboardClient,
    format: &OutputFormat,
    cmd: &ClaimsCmd,
) -> Result<(), Box<dyn std::error::Error>> {
    let listing: ListClaimsResponse = client
        .get(&format!("/influencers/{}/claims", cmd.id))
        .await?;

    if *format == OutputFormat::Json {
        println!("{}", format_json(&listing));
        return Ok(());
    }

    println!(
        "Claims for influencer {} ({})",
        listing.influencer_id,
        listing.claims.len()
    );
    println!();
    if listing.claims.is_empty() {
        println!("No claims recorded.");
        return Ok(());
    }
    let rows: Vec<ClaimRow> = listing.claims.iter().map(ClaimRow::from).collect();
    println!("{}", format_table(&rows));

    Ok(())
}
