// crates/trustboard-core/src/influencer.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique influencer identifier. Numeric ordering is the leaderboard tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfluencerId(pub u64);

impl fmt::Display for InfluencerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for InfluencerId {
    fn from(v: u64) -> Self {
        InfluencerId(v)
    }
}

/// A trust score bounded to [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TrustScore(u8);

impl TrustScore {
    pub const MIN: TrustScore = TrustScore(0);
    pub const MAX: TrustScore = TrustScore(100);

    /// Build a score, clamping values above 100.
    pub fn new(value: u8) -> Self {
        TrustScore(value.min(100))
    }

    /// Build a score from a real-valued ratio in percent.
    ///
    /// NaN maps to 0; the value is rounded and clamped to [0, 100].
    pub fn from_percent(value: f64) -> Self {
        if value.is_nan() {
            return TrustScore::MIN;
        }
        TrustScore(value.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for TrustScore {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        if v > 100 {
            Err(format!("trust score {} out of range 0..=100", v))
        } else {
            Ok(TrustScore(v))
        }
    }
}

impl From<TrustScore> for u8 {
    fn from(s: TrustScore) -> Self {
        s.0
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Topic an influencer is known for. Unknown names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Nutrition,
    Fitness,
    Medicine,
    MentalHealth,
    #[default]
    Uncategorized,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Nutrition => "Nutrition",
            Category::Fitness => "Fitness",
            Category::Medicine => "Medicine",
            Category::MentalHealth => "Mental Health",
            Category::Uncategorized => "Uncategorized",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "nutrition" => Category::Nutrition,
            "fitness" => Category::Fitness,
            "medicine" => Category::Medicine,
            "mentalhealth" => Category::MentalHealth,
            "" | "uncategorized" => Category::Uncategorized,
            _ => Category::Other(s.trim().to_string()),
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive fields of an influencer that callers may set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfluencerProfile {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub followers: Option<u64>,
}

/// An influencer tracked on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influencer {
    pub id: InfluencerId,
    pub name: String,
    pub category: Category,
    pub followers: u64,
    /// Latest committed trust score.
    pub trust_score: TrustScore,
    /// Number of effective (non-superseded) claims with status verified.
    pub verified_claims: u64,
    /// Inactive influencers are kept for lookups but leave the leaderboard.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Influencer {
    /// Create an influencer on first claim attribution.
    ///
    /// Fields missing from the profile fall back to a generated name,
    /// `Uncategorized`, and zero followers.
    pub fn new(id: InfluencerId, profile: &InfluencerProfile, now: DateTime<Utc>) -> Self {
        let mut influencer = Self {
            id,
            name: format!("influencer-{}", id),
            category: Category::Uncategorized,
            followers: 0,
            trust_score: TrustScore::MIN,
            verified_claims: 0,
            active: true,
            created_at: now,
            updated_at: now,
        };
        influencer.apply_profile(profile, now);
        influencer
    }

    /// Overwrite the profile fields that are present.
    pub fn apply_profile(&mut self, profile: &InfluencerProfile, now: DateTime<Utc>) {
        if let Some(name) = &profile.name {
            self.name = name.clone();
        }
        if let Some(category) = &profile.category {
            self.category = category.clone();
        }
        if let Some(followers) = profile.followers {
            self.followers = followers;
        }
        self.updated_at = now;
    }
}
