// crates/trustboard-cli/src/commands/leaderboard.rs
//
// `trustboard leaderboard` — show the ranked influencers.

use clap::Args;
use tabled::Tabled;

use trustboard_core::{Direction, RankedInfluencer};
use trustboard_service::LeaderboardPage;

use crate::http_client::TrustboardClient;
use crate::output::{format_json, format_table, OutputFormat};

/// Leaderboard display command.
#[derive(Debug, Args)]
pub struct LeaderboardCmd {
    /// Ordering: desc (highest first) or asc (lowest first).
    #[arg(long, default_value = "desc")]
    pub direction: Direction,

    /// Number of entries to show.
    #[arg(long, default_value = "10")]
    pub limit: usize,
}

/// A row in the leaderboard table.
#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Trust")]
    trust_score: u8,
    #[tabled(rename = "Verified")]
    verified_claims: u64,
    #[tabled(rename = "Followers")]
    followers: u64,
}

impl From<&RankedInfluencer> for LeaderboardRow {
    fn from(entry: &RankedInfluencer) -> Self {
        Self {
            rank: entry.rank,
            id: entry.influencer_id.0,
            name: entry.name.clone(),
            category: entry.category.to_string(),
            trust_score: entry.trust_score.value(),
            verified_claims: entry.verified_claims,
            followers: entry.followers,
        }
    }
}

/// Run the leaderboard command.
pub async fn run(
    client: &TrustboardClient,
    format: &OutputFormat,
    cmd: &LeaderboardCmd,
) -> Result<(), Box<dyn std::error::Error>> {
    let page: LeaderboardPage = client
        .get_with_query(
            "/leaderboard",
            &[
                ("direction", cmd.direction.as_str().to_string()),
                ("limit", cmd.limit.to_string()),
            ],
        )
        .await?;

    if *format == OutputFormat::Json {
        println!("{}", format_json(&page));
        return Ok(());
    }

    let order = match page.direction {
        Direction::Desc => "highest first",
        Direction::Asc => "lowest first",
    };
    println!(
        "Leaderboard ({}, showing {} of {})",
        order,
        page.entries.len(),
        page.total
    );
    println!();
    if page.entries.is_empty() {
        println!("No influencers on the leaderboard yet.");
        return Ok(());
    }
    let rows: Vec<LeaderboardRow> = page.entries.iter().map(LeaderboardRow::from).collect();
    println!("{}", format_table(&rows));

    Ok(())
}
