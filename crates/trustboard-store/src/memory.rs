// crates/trustboard-store/src/memory.rs
//
// In-memory repository implementing the `TrustRepository` trait.
//
// All state sits behind one async RwLock, so a `commit` is applied as a
// single critical section: readers see either none or all of its writes.
// Claims are kept in a primary map by id plus a per-influencer list that
// preserves ingestion order.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use trustboard_core::{
    Claim, ClaimCommit, ClaimId, Influencer, InfluencerId, TrustRepository, TrustboardError,
};

use crate::snapshot::Snapshot;

#[derive(Debug, Default)]
struct RepositoryState {
    influencers: BTreeMap<InfluencerId, Influencer>,
    claims: HashMap<ClaimId, Claim>,
    by_influencer: HashMap<InfluencerId, Vec<ClaimId>>,
}

impl RepositoryState {
    fn insert_claim(&mut self, claim: Claim) {
        self.by_influencer
            .entry(claim.influencer_id)
            .or_default()
            .push(claim.id);
        self.claims.insert(claim.id, claim);
    }
}

/// Repository holding influencers and claims in process memory.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: RwLock<RepositoryState>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a repository from a snapshot.
    ///
    /// Fails with `Conflict` if the snapshot repeats a claim id, and with
    /// `Storage` if a claim references an influencer the snapshot lacks.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, TrustboardError> {
        let mut state = RepositoryState::default();
        for influencer in snapshot.influencers {
            state.influencers.insert(influencer.id, influencer);
        }
        for claim in snapshot.claims {
            if state.claims.contains_key(&claim.id) {
                return Err(TrustboardError::Conflict(format!(
                    "snapshot contains claim {} twice",
                    claim.id
                )));
            }
            if !state.influencers.contains_key(&claim.influencer_id) {
                return Err(TrustboardError::Storage(format!(
                    "snapshot claim {} references unknown influencer {}",
                    claim.id, claim.influencer_id
                )));
            }
            state.insert_claim(claim);
        }
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Capture the current contents as a snapshot.
    ///
    /// Claims are emitted per influencer (by id) in ingestion order.
    pub async fn snapshot(&self) -> Snapshot {
        let state = self.state.read().await;
        let influencers: Vec<Influencer> = state.influencers.values().cloned().collect();
        let mut claims = Vec::with_capacity(state.claims.len());
        for id in state.influencers.keys() {
            if let Some(ids) = state.by_influencer.get(id) {
                claims.extend(ids.iter().filter_map(|cid| state.claims.get(cid)).cloned());
            }
        }
        Snapshot::new(influencers, claims)
    }

    /// Number of stored claims.
    pub async fn claim_count(&self) -> usize {
        self.state.read().await.claims.len()
    }
}

#[async_trait]
impl TrustRepository for InMemoryRepository {
    async fn get_influencer(&self, id: InfluencerId) -> Result<Option<Influencer>, TrustboardError> {
        Ok(self.state.read().await.influencers.get(&id).cloned())
    }

    async fn list_influencers(&self) -> Result<Vec<Influencer>, TrustboardError> {
        Ok(self.state.read().await.influencers.values().cloned().collect())
    }

    async fn save_influencer(&self, influencer: &Influencer) -> Result<(), TrustboardError> {
        self.state
            .write()
            .await
            .influencers
            .insert(influencer.id, influencer.clone());
        Ok(())
    }

    async fn get_claim(&self, id: &ClaimId) -> Result<Option<Claim>, TrustboardError> {
        Ok(self.state.read().await.claims.get(id).cloned())
    }

    async fn claims_for(&self, influencer: InfluencerId) -> Result<Vec<Claim>, TrustboardError> {
        let state = self.state.read().await;
        let claims = state
            .by_influencer
            .get(&influencer)
            .map(|ids| ids.iter().filter_map(|id| state.claims.get(id)).cloned().collect())
            .unwrap_or_default();
        Ok(claims)
    }

    async fn commit(&self, commit: ClaimCommit) -> Result<(), TrustboardError> {
        let mut state = self.state.write().await;

        // Validate everything before the first write.
        if let Some(claim) = &commit.insert {
            if state.claims.contains_key(&claim.id) {
                return Err(TrustboardError::Conflict(format!(
                    "claim {} already exists",
                    claim.id
                )));
            }
        }
        for claim in &commit.update {
            if !state.claims.contains_key(&claim.id) {
                return Err(TrustboardError::NotFound(format!("claim {}", claim.id)));
            }
        }

        for claim in commit.update {
            state.claims.insert(claim.id, claim);
        }
        if let Some(claim) = commit.insert {
            state.insert_claim(claim);
        }
        state
            .influencers
            .insert(commit.influencer.id, commit.influencer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use trustboard_core::{ClaimStatus, InfluencerProfile, TrustScore};
    use uuid::Uuid;

    fn influencer(id: u64) -> Influencer {
        Influencer::new(InfluencerId(id), &InfluencerProfile::default(), Utc::now())
    }

    fn claim(influencer: u64, status: ClaimStatus) -> Claim {
        let now = Utc::now();
        Claim {
            id: Uuid::now_v7(),
            influencer_id: InfluencerId(influencer),
            status,
            timestamp: now,
            weight: 1.0,
            supersedes: None,
            superseded_by: None,
            statement: None,
            recorded_at: now,
        }
    }

    #[tokio::test]
    async fn commit_inserts_claim_and_influencer() {
        let repo = InMemoryRepository::new();
        let c = claim(1, ClaimStatus::Verified);
        let mut inf = influencer(1);
        inf.verified_claims = 1;
        repo.commit(ClaimCommit {
            insert: Some(c.clone()),
            update: vec![],
            influencer: inf.clone(),
        })
        .await
        .unwrap();

        assert_eq!(repo.get_claim(&c.id).await.unwrap(), Some(c.clone()));
        assert_eq!(repo.claims_for(InfluencerId(1)).await.unwrap(), vec![c]);
        assert_eq!(repo.get_influencer(InfluencerId(1)).await.unwrap(), Some(inf));
    }

    #[tokio::test]
    async fn duplicate_claim_commit_writes_nothing() {
        let repo = InMemoryRepository::new();
        let c = claim(1, ClaimStatus::Verified);
        repo.commit(ClaimCommit {
            insert: Some(c.clone()),
            update: vec![],
            influencer: influencer(1),
        })
        .await
        .unwrap();

        let mut changed = influencer(1);
        changed.trust_score = TrustScore::new(77);
        let err = repo
            .commit(ClaimCommit {
                insert: Some(c.clone()),
                update: vec![],
                influencer: changed,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TrustboardError::Conflict(_)));

        let stored = repo.get_influencer(InfluencerId(1)).await.unwrap().unwrap();
        assert_eq!(stored.trust_score, TrustScore::MIN);
        assert_eq!(repo.claim_count().await, 1);
    }

    #[tokio::test]
    async fn update_of_unknown_claim_is_rejected() {
        let repo = InMemoryRepository::new();
        let err = repo
            .commit(ClaimCommit {
                insert: None,
                update: vec![claim(1, ClaimStatus::Verified)],
                influencer: influencer(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TrustboardError::NotFound(_)));
        assert!(repo.get_influencer(InfluencerId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn claims_keep_ingestion_order() {
        let repo = InMemoryRepository::new();
        let claims: Vec<Claim> = (0..5).map(|_| claim(3, ClaimStatus::Unverified)).collect();
        for c in &claims {
            repo.commit(ClaimCommit {
                insert: Some(c.clone()),
                update: vec![],
                influencer: influencer(3),
            })
            .await
            .unwrap();
        }
        assert_eq!(repo.claims_for(InfluencerId(3)).await.unwrap(), claims);
        assert!(repo.claims_for(InfluencerId(4)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn snapshot_restores_contents() {
        let repo = InMemoryRepository::new();
        for i in [2u64, 1] {
            repo.commit(ClaimCommit {
                insert: Some(claim(i, ClaimStatus::Verified)),
                update: vec![],
                influencer: influencer(i),
            })
            .await
            .unwrap();
        }
        let snap = repo.snapshot().await;
        assert_eq!(snap.influencers.len(), 2);
        assert_eq!(snap.claims[0].influencer_id, InfluencerId(1));

        let restored = InMemoryRepository::from_snapshot(snap).unwrap();
        assert_eq!(restored.claim_count().await, 2);
        assert_eq!(
            restored.list_influencers().await.unwrap(),
            repo.list_influencers().await.unwrap()
        );
    }

    #[test]
    fn snapshot_with_orphan_claim_is_rejected() {
        let snap = Snapshot::new(vec![], vec![claim(9, ClaimStatus::Verified)]);
        let err = InMemoryRepository::from_snapshot(snap).unwrap_err();
        assert!(matches!(err, TrustboardError::Storage(_)));
    }
}
