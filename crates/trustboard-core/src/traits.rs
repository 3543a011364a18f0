// crates/trustboard-core/src/traits.rs

use async_trait::async_trait;

use crate::claim::{Claim, ClaimId};
use crate::error::TrustboardError;
use crate::influencer::{Influencer, InfluencerId, TrustScore};

/// A set of writes that must land together or not at all.
///
/// Produced by claim ingestion after the new score has been computed.
#[derive(Debug, Clone)]
pub struct ClaimCommit {
    /// Newly ingested claim. Must not collide with an existing id.
    pub insert: Option<Claim>,
    /// Existing claims being replaced (status change or supersede marker).
    pub update: Vec<Claim>,
    /// Owning influencer with its recomputed score and verified count.
    pub influencer: Influencer,
}

/// Data-access abstraction for influencers and claims.
///
/// Implemented by trustboard-store (in-memory with JSON snapshots).
#[async_trait]
pub trait TrustRepository: Send + Sync {
    /// Retrieve an influencer by id.
    async fn get_influencer(&self, id: InfluencerId) -> Result<Option<Influencer>, TrustboardError>;

    /// List every influencer, active or not, ordered by id.
    async fn list_influencers(&self) -> Result<Vec<Influencer>, TrustboardError>;

    /// Save an influencer record. Overwrites if the id already exists.
    async fn save_influencer(&self, influencer: &Influencer) -> Result<(), TrustboardError>;

    /// Retrieve a claim by id.
    async fn get_claim(&self, id: &ClaimId) -> Result<Option<Claim>, TrustboardError>;

    /// All claims attributed to an influencer, in ingestion order.
    async fn claims_for(&self, influencer: InfluencerId) -> Result<Vec<Claim>, TrustboardError>;

    /// Apply a commit atomically.
    ///
    /// Fails with `Conflict` without writing anything if `insert` carries an
    /// id that already exists.
    async fn commit(&self, commit: ClaimCommit) -> Result<(), TrustboardError>;
}

/// Trait for trust score computation.
///
/// Implemented by trustboard-scoring.
pub trait TrustScorer: Send + Sync {
    /// Compute a bounded trust score from an influencer's claim history.
    fn compute_score(&self, claims: &[Claim]) -> Result<TrustScore, TrustboardError>;

    /// Validate a single claim before it is accepted.
    fn validate_claim(&self, claim: &Claim) -> Result<(), TrustboardError>;
}
