// crates/trustboard-cli/src/commands/influencer.rs
//
// `trustboard influencer <id>` — show one influencer.

use clap::Args;

use trustboard_rpc::handlers::influencer::InfluencerView;

use crate::http_client::TrustboardClient;
use crate::output::{format_json, or_dash, OutputFormat};

/// Influencer lookup command.
#[derive(Debug, Args)]
pub struct InfluencerCmd {
    /// Numeric influencer id.
    pub id: u64,
}

/// Run the influencer command.
pub async fn run(
    client: &TrustboardClient,
    format: &OutputFormat,
    cmd: &InfluencerCmd,
) -> Result<(), Box<dyn std::error::Error>> {
    let view: InfluencerView = client.get(&format!("/influencers/{}", cmd.id)).await?;

    if *format == OutputFormat::Json {
        println!("{}", format_json(&view));
        return Ok(());
    }

    let inf = &view.influencer;
    println!("Influencer {}", inf.id);
    println!("-----------");
    println!("  Name:            {}", inf.name);
    println!("  Category:        {}", inf.category);
    println!("  Followers:       {}", inf.followers);
    println!("  Trust score:     {}", inf.trust_score);
    println!("  Verified claims: {}", inf.verified_claims);
    println!("  Rank:            {}", or_dash(view.rank));
    println!("  Active:          {}", if inf.active { "yes" } else { "no" });
    println!("  Created:         {}", inf.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Updated:         {}", inf.updated_at.format("%Y-%m-%d %H:%M:%S"));

    Ok(())
}
