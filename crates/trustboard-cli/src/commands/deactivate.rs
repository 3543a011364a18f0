// crates/trustboard-cli/src/commands/deactivate.rs
//
// `trustboard deactivate <id>` — take an influencer off the leaderboard.

use clap::Args;

use crate::http_client::TrustboardClient;

/// Deactivation command.
#[derive(Debug, Args)]
pub struct DeactivateCmd {
    /// Numeric influencer id.
    pub id: u64,
}

/// Run the deactivate command.
pub async fn run(client: &TrustboardClient, cmd: &DeactivateCmd) -> Result<(), Box<dyn std::error::Error>> {
    client.delete(&format!("/influencers/{}", cmd.id)).await?;
    println!("Influencer {} deactivated.", cmd.id);
    Ok(())
}
