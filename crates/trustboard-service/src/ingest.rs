// crates/trustboard-service/src/ingest.rs
//
// Claim ingestion: validate, recompute, commit, reposition, acknowledge.
//
// Every write path takes the per-influencer lock first, computes the new
// state without touching storage, and only then commits. The repository
// commit and the index reposition happen under the leaderboard write lock,
// so readers never pair a new score with an old ordering. Any failure before
// the commit leaves the influencer's score and claim count untouched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trustboard_core::{
    Claim, ClaimCommit, ClaimId, ClaimStatus, Influencer, InfluencerId, InfluencerProfile,
    TrustRepository, TrustScore, TrustScorer, TrustboardError,
};

use crate::locks::KeyedLocks;
use crate::SharedLeaderboard;

fn default_weight() -> f64 {
    1.0
}

fn default_status() -> ClaimStatus {
    ClaimStatus::Unverified
}

/// A claim as submitted by a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimSubmission {
    /// Caller-chosen claim id; a UUID v7 is assigned when absent.
    #[serde(default)]
    pub id: Option<ClaimId>,
    pub influencer_id: InfluencerId,
    #[serde(default = "default_status")]
    pub status: ClaimStatus,
    /// When the claim was made; defaults to the time of ingestion.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Prior claim of the same influencer that this one corrects.
    #[serde(default)]
    pub supersedes: Option<ClaimId>,
    #[serde(default)]
    pub statement: Option<String>,
    /// Profile used only when this claim creates the influencer.
    #[serde(default)]
    pub influencer: Option<InfluencerProfile>,
}

impl ClaimSubmission {
    /// Minimal submission with default status and timestamp.
    pub fn new(influencer_id: InfluencerId, weight: f64) -> Self {
        Self {
            id: None,
            influencer_id,
            status: default_status(),
            timestamp: None,
            weight,
            supersedes: None,
            statement: None,
            influencer: None,
        }
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn superseding(mut self, prior: ClaimId) -> Self {
        self.supersedes = Some(prior);
        self
    }

    pub fn with_profile(mut self, profile: InfluencerProfile) -> Self {
        self.influencer = Some(profile);
        self
    }

    fn into_claim(self, now: DateTime<Utc>) -> (Claim, Option<InfluencerProfile>) {
        let claim = Claim {
            id: self.id.unwrap_or_else(Uuid::now_v7),
            influencer_id: self.influencer_id,
            status: self.status,
            timestamp: self.timestamp.unwrap_or(now),
            weight: self.weight,
            supersedes: self.supersedes,
            superseded_by: None,
            statement: self.statement,
            recorded_at: now,
        };
        (claim, self.influencer)
    }
}

/// Acknowledgement returned once a write is committed and indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    pub claim: Claim,
    pub influencer_id: InfluencerId,
    pub trust_score: TrustScore,
    pub verified_claims: u64,
    /// True when this claim created the influencer.
    pub created_influencer: bool,
}

/// Write side of the service.
#[derive(Clone)]
pub struct ClaimIngestor {
    repository: Arc<dyn TrustRepository>,
    scorer: Arc<dyn TrustScorer>,
    leaderboard: SharedLeaderboard,
    locks: Arc<KeyedLocks<InfluencerId>>,
}

impl ClaimIngestor {
    pub fn new(
        repository: Arc<dyn TrustRepository>,
        scorer: Arc<dyn TrustScorer>,
        leaderboard: SharedLeaderboard,
    ) -> Self {
        Self {
            repository,
            scorer,
            leaderboard,
            locks: Arc::new(KeyedLocks::new()),
        }
    }

    /// Ingest a new claim.
    ///
    /// Creates the influencer on first attribution. Fails with
    /// `InvalidClaim` for malformed input or a deactivated influencer,
    /// `Conflict` for a duplicate id or an already-superseded prior claim,
    /// and `NotFound` for an unknown prior claim.
    pub async fn submit_claim(&self, submission: ClaimSubmission) -> Result<ClaimReceipt, TrustboardError> {
        let influencer_id = submission.influencer_id;
        let _guard = self.locks.lock(&influencer_id).await;

        let now = Utc::now();
        let (claim, profile) = submission.into_claim(now);
        self.scorer.validate_claim(&claim)?;

        let existing = self.repository.get_influencer(influencer_id).await?;
        if let Some(inf) = &existing {
            ensure_active(inf)?;
        }

        if self.repository.get_claim(&claim.id).await?.is_some() {
            return Err(TrustboardError::Conflict(format!(
                "claim {} already exists",
                claim.id
            )));
        }

        let mut history = self.repository.claims_for(influencer_id).await?;
        let mut updates = Vec::new();
        if let Some(prior_id) = claim.supersedes {
            let prior = self.superseded_claim(&prior_id, &claim).await?;
            if let Some(slot) = history.iter_mut().find(|c| c.id == prior.id) {
                *slot = prior.clone();
            }
            updates.push(prior);
        }
        history.push(claim.clone());

        let trust_score = self.scorer.compute_score(&history)?;
        let verified_claims = count_verified(&history);

        let created_influencer = existing.is_none();
        let mut influencer = match existing {
            Some(inf) => inf,
            None => Influencer::new(influencer_id, &profile.unwrap_or_default(), now),
        };
        influencer.trust_score = trust_score;
        influencer.verified_claims = verified_claims;
        influencer.updated_at = now;

        self.commit_and_index(ClaimCommit {
            insert: Some(claim.clone()),
            update: updates,
            influencer,
        })
        .await?;

        tracing::info!(
            claim_id = %claim.id,
            influencer_id = %influencer_id,
            status = %claim.status,
            score = %trust_score,
            created_influencer,
            "Claim ingested"
        );

        Ok(ClaimReceipt {
            claim,
            influencer_id,
            trust_score,
            verified_claims,
            created_influencer,
        })
    }

    /// Settle an unverified claim as verified or refuted.
    ///
    /// Settled claims are immutable; correct them by submitting a new claim
    /// that supersedes them.
    pub async fn settle_claim(
        &self,
        claim_id: &ClaimId,
        status: ClaimStatus,
    ) -> Result<ClaimReceipt, TrustboardError> {
        if !status.is_settled() {
            return Err(TrustboardError::InvalidClaim(format!(
                "claim {} can only be settled as verified or refuted",
                claim_id
            )));
        }

        let owner = self
            .repository
            .get_claim(claim_id)
            .await?
            .ok_or_else(|| TrustboardError::NotFound(format!("claim {}", claim_id)))?
            .influencer_id;
        let _guard = self.locks.lock(&owner).await;

        // Re-read under the lock; a concurrent writer may have settled it.
        let mut claim = self
            .repository
            .get_claim(claim_id)
            .await?
            .ok_or_else(|| TrustboardError::NotFound(format!("claim {}", claim_id)))?;
        if claim.status.is_settled() {
            return Err(TrustboardError::InvalidClaim(format!(
                "claim {} is already {}",
                claim_id, claim.status
            )));
        }
        if let Some(by) = claim.superseded_by {
            return Err(TrustboardError::Conflict(format!(
                "claim {} is superseded by {}",
                claim_id, by
            )));
        }

        let mut influencer = self
            .repository
            .get_influencer(owner)
            .await?
            .ok_or_else(|| TrustboardError::NotFound(format!("influencer {}", owner)))?;
        ensure_active(&influencer)?;

        claim.status = status;
        let mut history = self.repository.claims_for(owner).await?;
        if let Some(slot) = history.iter_mut().find(|c| c.id == claim.id) {
            *slot = claim.clone();
        }

        let trust_score = self.scorer.compute_score(&history)?;
        let verified_claims = count_verified(&history);
        influencer.trust_score = trust_score;
        influencer.verified_claims = verified_claims;
        influencer.updated_at = Utc::now();

        self.commit_and_index(ClaimCommit {
            insert: None,
            update: vec![claim.clone()],
            influencer,
        })
        .await?;

        tracing::info!(
            claim_id = %claim.id,
            influencer_id = %owner,
            status = %status,
            score = %trust_score,
            "Claim settled"
        );

        Ok(ClaimReceipt {
            claim,
            influencer_id: owner,
            trust_score,
            verified_claims,
            created_influencer: false,
        })
    }

    /// Mark an influencer inactive and drop it from the leaderboard.
    ///
    /// Deactivating an inactive influencer is a no-op.
    pub async fn deactivate_influencer(&self, id: InfluencerId) -> Result<Influencer, TrustboardError> {
        let _guard = self.locks.lock(&id).await;
        let mut influencer = self
            .repository
            .get_influencer(id)
            .await?
            .ok_or_else(|| TrustboardError::NotFound(format!("influencer {}", id)))?;
        if !influencer.active {
            return Ok(influencer);
        }

        influencer.active = false;
        influencer.updated_at = Utc::now();

        let mut index = self.leaderboard.write().await;
        self.repository.save_influencer(&influencer).await?;
        index.remove(id);
        drop(index);

        tracing::info!(influencer_id = %id, "Influencer deactivated");
        Ok(influencer)
    }

    /// Update name, category, or followers of an existing influencer.
    pub async fn update_profile(
        &self,
        id: InfluencerId,
        profile: InfluencerProfile,
    ) -> Result<Influencer, TrustboardError> {
        let _guard = self.locks.lock(&id).await;
        let mut influencer = self
            .repository
            .get_influencer(id)
            .await?
            .ok_or_else(|| TrustboardError::NotFound(format!("influencer {}", id)))?;
        influencer.apply_profile(&profile, Utc::now());
        self.repository.save_influencer(&influencer).await?;
        tracing::debug!(influencer_id = %id, "Influencer profile updated");
        Ok(influencer)
    }

    /// Repopulate the index from the repository's committed scores.
    ///
    /// Returns the number of active influencers indexed.
    pub async fn rebuild_index(&self) -> Result<usize, TrustboardError> {
        let mut index = self.leaderboard.write().await;
        let influencers = self.repository.list_influencers().await?;
        index.clear();
        for inf in influencers.iter().filter(|i| i.active) {
            index.upsert(inf.id, inf.trust_score);
        }
        tracing::info!(entries = index.len(), "Leaderboard index rebuilt");
        Ok(index.len())
    }

    /// Look up the prior claim a correction points at and mark it superseded.
    async fn superseded_claim(&self, prior_id: &ClaimId, claim: &Claim) -> Result<Claim, TrustboardError> {
        let mut prior = self
            .repository
            .get_claim(prior_id)
            .await?
            .ok_or_else(|| TrustboardError::NotFound(format!("claim {}", prior_id)))?;
        if prior.influencer_id != claim.influencer_id {
            return Err(TrustboardError::InvalidClaim(format!(
                "claim {} belongs to influencer {}, not {}",
                prior_id, prior.influencer_id, claim.influencer_id
            )));
        }
        if let Some(by) = prior.superseded_by {
            return Err(TrustboardError::Conflict(format!(
                "claim {} is already superseded by {}",
                prior_id, by
            )));
        }
        prior.superseded_by = Some(claim.id);
        Ok(prior)
    }

    async fn commit_and_index(&self, commit: ClaimCommit) -> Result<(), TrustboardError> {
        let id = commit.influencer.id;
        let score = commit.influencer.trust_score;
        let mut index = self.leaderboard.write().await;
        self.repository.commit(commit).await?;
        index.upsert(id, score);
        Ok(())
    }
}

impl std::fmt::Debug for ClaimIngestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimIngestor").finish_non_exhaustive()
    }
}

fn ensure_active(influencer: &Influencer) -> Result<(), TrustboardError> {
    if influencer.active {
        Ok(())
    } else {
        Err(TrustboardError::InvalidClaim(format!(
            "influencer {} is deactivated",
            influencer.id
        )))
    }
}

fn count_verified(claims: &[Claim]) -> u64 {
    claims.iter().filter(|c| c.counts_as_verified()).count() as u64
}
