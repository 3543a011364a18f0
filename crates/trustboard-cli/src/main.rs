// crates/trustboard-cli/src/main.rs
//
// CLI entrypoint for the Trustboard developer tools.
//
// Talks to a running trustboard-daemon over HTTP: browse the leaderboard,
// look up influencers and their claims, submit and settle claims.

mod commands;
mod http_client;
mod output;

use clap::{Parser, Subcommand};
use commands::claims::ClaimsCmd;
use commands::deactivate::DeactivateCmd;
use commands::influencer::InfluencerCmd;
use commands::leaderboard::LeaderboardCmd;
use commands::settle::SettleCmd;
use commands::submit::SubmitCmd;
use http_client::TrustboardClient;
use output::OutputFormat;

/// Trustboard CLI: influencer trust leaderboard tools.
#[derive(Parser, Debug)]
#[command(
    name = "trustboard",
    version = "0.1.0",
    about = "Trustboard CLI for the influencer trust score leaderboard"
)]
struct Cli {
    /// HTTP endpoint of the trustboard-daemon.
    #[arg(long, global = true, default_value = "http://localhost:8080")]
    rpc: String,

    /// Print raw JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the leaderboard.
    Leaderboard(LeaderboardCmd),

    /// Show one influencer, including deactivated ones.
    Influencer(InfluencerCmd),

    /// List an influencer's claims.
    Claims(ClaimsCmd),

    /// Submit a new claim.
    Submit(SubmitCmd),

    /// Settle an unverified claim as verified or refuted.
    Settle(SettleCmd),

    /// Remove an influencer from the leaderboard.
    Deactivate(DeactivateCmd),

    /// Show aggregate leaderboard figures.
    Stats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TrustboardClient::new(&cli.rpc);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    match &cli.command {
        Commands::Leaderboard(cmd) => commands::leaderboard::run(&client, &format, cmd).await?,
        Commands::Influencer(cmd) => commands::influencer::run(&client, &format, cmd).await?,
        Commands::Claims(cmd) => commands::claims::run(&client, &format, cmd).await?,
        Commands::Submit(cmd) => commands::submit::run(&client, &format, cmd).await?,
        Commands::Settle(cmd) => commands::settle::run(&client, &format, cmd).await?,
        Commands::Deactivate(cmd) => commands::deactivate::run(&client, cmd).await?,
        Commands::Stats => commands::stats::run(&client, &format).await?,
    }

    Ok(())
}
