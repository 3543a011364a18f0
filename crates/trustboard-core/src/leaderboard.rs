// crates/trustboard-core/src/leaderboard.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::influencer::{Category, Influencer, InfluencerId, TrustScore};

/// Sort direction for leaderboard queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Highest score first.
    #[default]
    #[serde(alias = "highestFirst")]
    Desc,
    /// Lowest score first.
    #[serde(alias = "lowestFirst")]
    Asc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Desc => "desc",
            Direction::Asc => "asc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desc" | "highestFirst" => Ok(Direction::Desc),
            "asc" | "lowestFirst" => Ok(Direction::Asc),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}

/// An (influencer id, score) pair participating in ranked queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub influencer_id: InfluencerId,
    pub score: TrustScore,
}

/// A leaderboard row enriched with the influencer's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedInfluencer {
    /// 1-based position within the requested direction.
    pub rank: usize,
    pub influencer_id: InfluencerId,
    pub name: String,
    pub category: Category,
    pub trust_score: TrustScore,
    pub followers: u64,
    pub verified_claims: u64,
}

impl RankedInfluencer {
    pub fn new(rank: usize, influencer: &Influencer) -> Self {
        Self {
            rank,
            influencer_id: influencer.id,
            name: influencer.name.clone(),
            category: influencer.category.clone(),
            trust_score: influencer.trust_score,
            followers: influencer.followers,
            verified_claims: influencer.verified_claims,
        }
    }
}

/// Aggregate figures shown above the leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardStats {
    pub active_influencers: u64,
    pub verified_claims: u64,
    /// Mean trust score of active influencers; 0 when there are none.
    pub average_trust_score: f64,
}

impl LeaderboardStats {
    /// Aggregate over the active influencers in `influencers`.
    pub fn from_influencers<'a>(influencers: impl IntoIterator<Item = &'a Influencer>) -> Self {
        let mut stats = LeaderboardStats::default();
        let mut score_sum = 0u64;
        for inf in influencers.into_iter().filter(|i| i.active) {
            stats.active_influencers += 1;
            stats.verified_claims += inf.verified_claims;
            score_sum += inf.trust_score.value() as u64;
        }
        if stats.active_influencers > 0 {
            let avg = score_sum as f64 / stats.active_influencers as f64;
            stats.average_trust_score = (avg * 10.0).round() / 10.0;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::influencer::InfluencerProfile;
    use chrono::Utc;

    #[test]
    fn direction_accepts_page_aliases() {
        assert_eq!("highestFirst".parse::<Direction>().unwrap(), Direction::Desc);
        assert_eq!("lowestFirst".parse::<Direction>().unwrap(), Direction::Asc);
        let d: Direction = serde_json::from_str("\"lowestFirst\"").unwrap();
        assert_eq!(d, Direction::Asc);
        assert_eq!(Direction::default(), Direction::Desc);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn stats_skip_inactive_influencers() {
        let now = Utc::now();
        let mut a = Influencer::new(InfluencerId(1), &InfluencerProfile::default(), now);
        a.trust_score = TrustScore::new(95);
        a.verified_claims = 200;
        let mut b = Influencer::new(InfluencerId(2), &InfluencerProfile::default(), now);
        b.trust_score = TrustScore::new(90);
        b.verified_claims = 150;
        let mut c = Influencer::new(InfluencerId(3), &InfluencerProfile::default(), now);
        c.trust_score = TrustScore::new(10);
        c.verified_claims = 3;
        c.active = false;

        let stats = LeaderboardStats::from_influencers([&a, &b, &c]);
        assert_eq!(stats.active_influencers, 2);
        assert_eq!(stats.verified_claims, 350);
        assert!((stats.average_trust_score - 92.5).abs() < 1e-9);
    }

    #[test]
    fn stats_empty_is_zero() {
        let stats = LeaderboardStats::from_influencers(std::iter::empty());
        assert_eq!(stats, LeaderboardStats::default());
    }
}
