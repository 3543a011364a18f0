// crates/trustboard-cli/src/commands/settle.rs
//
// `trustboard settle <claim-id> <status>` — settle an unverified claim.

use clap::Args;
use uuid::Uuid;

use trustboard_core::ClaimStatus;
use trustboard_rpc::handlers::claim::SettleClaimRequest;
use trustboard_service::ClaimReceipt;

use crate::commands::submit::print_receipt;
use crate::http_client::TrustboardClient;
use crate::output::OutputFormat;

/// Claim settlement command.
#[derive(Debug, Args)]
pub struct SettleCmd {
    /// Claim to settle.
    pub claim_id: Uuid,

    /// verified or refuted.
    pub status: ClaimStatus,
}

/// Run the settle command.
pub async fn run(
    client: &TrustboardClient,
    format: &OutputFormat,
    cmd: &SettleCmd,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = SettleClaimRequest { status: cmd.status };
    let receipt: ClaimReceipt = client
        .patch(&format!("/claims/{}", cmd.claim_id), &request)
        .await?;
    print_receipt(format, &receipt, "Claim settled");
    Ok(())
}
