// crates/trustboard-service/src/query.rs
//
// Read side of the service. Nothing here mutates state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use trustboard_core::{
    Claim, ClaimId, Direction, Influencer, InfluencerId, LeaderboardStats, RankedInfluencer,
    TrustRepository, TrustboardError,
};

use crate::SharedLeaderboard;

/// One page of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardPage {
    pub direction: Direction,
    /// Number of influencers on the leaderboard, not just on this page.
    pub total: usize,
    pub entries: Vec<RankedInfluencer>,
}

/// Answers leaderboard and lookup requests.
#[derive(Clone)]
pub struct QueryService {
    repository: Arc<dyn TrustRepository>,
    leaderboard: SharedLeaderboard,
}

impl QueryService {
    pub fn new(repository: Arc<dyn TrustRepository>, leaderboard: SharedLeaderboard) -> Self {
        Self {
            repository,
            leaderboard,
        }
    }

    /// The first `n` influencers in `direction`.
    pub async fn get_top(&self, n: usize, direction: Direction) -> Result<Vec<RankedInfluencer>, TrustboardError> {
        Ok(self.get_page(n, direction).await?.entries)
    }

    /// Like `get_top`, with the leaderboard size alongside.
    ///
    /// The read guard is held while rows are enriched, so every row carries
    /// the score it was ranked by.
    pub async fn get_page(&self, n: usize, direction: Direction) -> Result<LeaderboardPage, TrustboardError> {
        let index = self.leaderboard.read().await;
        let total = index.len();
        let mut entries = Vec::with_capacity(n.min(total));
        for entry in index.top_n(n, direction) {
            match self.repository.get_influencer(entry.influencer_id).await? {
                Some(inf) => entries.push(RankedInfluencer::new(entries.len() + 1, &inf)),
                None => tracing::warn!(
                    influencer_id = %entry.influencer_id,
                    "Leaderboard entry without influencer record"
                ),
            }
        }
        Ok(LeaderboardPage {
            direction,
            total,
            entries,
        })
    }

    /// Look up an influencer, active or not.
    pub async fn get_by_id(&self, id: InfluencerId) -> Result<Influencer, TrustboardError> {
        self.repository
            .get_influencer(id)
            .await?
            .ok_or_else(|| TrustboardError::NotFound(format!("influencer {}", id)))
    }

    /// Descending rank of an active influencer.
    pub async fn rank_of(&self, id: InfluencerId) -> Option<usize> {
        self.leaderboard.read().await.rank_of(id)
    }

    /// Claims attributed to an influencer, in ingestion order.
    pub async fn claims_for(&self, id: InfluencerId) -> Result<Vec<Claim>, TrustboardError> {
        // Distinguish "no claims" from "no such influencer".
        self.get_by_id(id).await?;
        self.repository.claims_for(id).await
    }

    pub async fn get_claim(&self, id: &ClaimId) -> Result<Claim, TrustboardError> {
        self.repository
            .get_claim(id)
            .await?
            .ok_or_else(|| TrustboardError::NotFound(format!("claim {}", id)))
    }

    /// Aggregate figures over active influencers.
    pub async fn stats(&self) -> Result<LeaderboardStats, TrustboardError> {
        let influencers = self.repository.list_influencers().await?;
        Ok(LeaderboardStats::from_influencers(&influencers))
    }
}

impl std::fmt::Debug for QueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryService").finish_non_exhaustive()
    }
}
