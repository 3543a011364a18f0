// crates/trustboard-store/src/leaderboard.rs
//
// Ordered leaderboard index.
//
// Entries live in a BTreeSet keyed by (score descending, id ascending), with
// a side map from id to current score so a reposition can find the old key.
// Upsert and remove are O(log n); ranked reads walk the set from either end.
//
// The index itself is not synchronized. The service wraps it in an async
// RwLock and holds the write guard for the whole reposition.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use trustboard_core::{Direction, InfluencerId, LeaderboardEntry, TrustScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct RankKey {
    score: Reverse<TrustScore>,
    id: InfluencerId,
}

impl RankKey {
    fn new(id: InfluencerId, score: TrustScore) -> Self {
        Self {
            score: Reverse(score),
            id,
        }
    }

    fn entry(&self) -> LeaderboardEntry {
        LeaderboardEntry {
            influencer_id: self.id,
            score: self.score.0,
        }
    }
}

/// Sorted view over influencers by trust score.
#[derive(Debug, Default, Clone)]
pub struct LeaderboardIndex {
    ordered: BTreeSet<RankKey>,
    scores: HashMap<InfluencerId, TrustScore>,
}

impl LeaderboardIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or reposition an influencer.
    ///
    /// Returns `true` if the ordering changed. Upserting an unchanged score
    /// is a no-op.
    pub fn upsert(&mut self, id: InfluencerId, score: TrustScore) -> bool {
        match self.scores.insert(id, score) {
            Some(old) if old == score => false,
            Some(old) => {
                self.ordered.remove(&RankKey::new(id, old));
                self.ordered.insert(RankKey::new(id, score));
                true
            }
            None => {
                self.ordered.insert(RankKey::new(id, score));
                true
            }
        }
    }

    /// Drop an influencer from the index. Returns its last score, if present.
    pub fn remove(&mut self, id: InfluencerId) -> Option<TrustScore> {
        let score = self.scores.remove(&id)?;
        self.ordered.remove(&RankKey::new(id, score));
        Some(score)
    }

    /// The first `n` entries in the requested direction.
    ///
    /// Descending order breaks ties by ascending id; ascending order is the
    /// exact reverse of the full descending order.
    pub fn top_n(&self, n: usize, direction: Direction) -> Vec<LeaderboardEntry> {
        match direction {
            Direction::Desc => self.ordered.iter().take(n).map(RankKey::entry).collect(),
            Direction::Asc => self.ordered.iter().rev().take(n).map(RankKey::entry).collect(),
        }
    }

    /// Current score of an influencer.
    pub fn score_of(&self, id: InfluencerId) -> Option<TrustScore> {
        self.scores.get(&id).copied()
    }

    /// 1-based position of an influencer in descending order.
    pub fn rank_of(&self, id: InfluencerId) -> Option<usize> {
        let score = self.score_of(id)?;
        let key = RankKey::new(id, score);
        Some(self.ordered.range(..key).count() + 1)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.ordered.clear();
        self.scores.clear();
    }
}
