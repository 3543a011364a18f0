// crates/trustboard-cli/src/commands/stats.rs
//
// `trustboard stats` — aggregate figures over active influencers.

use trustboard_core::LeaderboardStats;

use crate::http_client::TrustboardClient;
use crate::output::{format_json, OutputFormat};

/// Run the stats command.
pub async fn run(client: &TrustboardClient, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let stats: LeaderboardStats = client.get("/stats").await?;

    if *format == OutputFormat::Json {
        println!("{}", format_json(&stats));
        return Ok(());
    }

    println!("Leaderboard Stats");
    println!("-----------------");
    println!("  Active influencers:   {}", stats.active_influencers);
    println!("  Verified claims:      {}", stats.verified_claims);
    println!("  Average trust score:  {:.1}", stats.average_trust_score);

    Ok(())
}
