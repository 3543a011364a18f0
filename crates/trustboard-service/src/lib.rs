// crates/trustboard-service/src/lib.rs
//
// trustboard-service: Claim ingestion and leaderboard queries.
//
// Claim ingestion recomputes the owning influencer's score, commits the
// claim and influencer to the repository, and repositions the influencer in
// the leaderboard index before acknowledging. Writes serialize per
// influencer; reads share a consistent view of the index.

pub mod ingest;
pub mod locks;
pub mod query;

use std::sync::Arc;

use tokio::sync::RwLock;

use trustboard_core::{TrustRepository, TrustScorer};
use trustboard_store::LeaderboardIndex;

pub use ingest::{ClaimIngestor, ClaimReceipt, ClaimSubmission};
pub use locks::KeyedLocks;
pub use query::{LeaderboardPage, QueryService};

/// Leaderboard index shared between the ingestor and the query service.
pub type SharedLeaderboard = Arc<RwLock<LeaderboardIndex>>;

/// Ingestion and query halves wired to the same repository and index.
#[derive(Clone)]
pub struct TrustService {
    pub ingest: ClaimIngestor,
    pub query: QueryService,
}

impl TrustService {
    /// Build both halves over an injected repository and scorer.
    ///
    /// The index starts empty; call `ingest.rebuild_index()` when the
    /// repository already holds data.
    pub fn new(repository: Arc<dyn TrustRepository>, scorer: Arc<dyn TrustScorer>) -> Self {
        let leaderboard: SharedLeaderboard = Arc::new(RwLock::new(LeaderboardIndex::new()));
        Self {
            ingest: ClaimIngestor::new(repository.clone(), scorer, leaderboard.clone()),
            query: QueryService::new(repository, leaderboard),
        }
    }
}

impl std::fmt::Debug for TrustService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustService").finish_non_exhaustive()
    }
}
