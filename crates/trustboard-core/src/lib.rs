// crates/trustboard-core/src/lib.rs
//
// trustboard-core: Core types, errors, and traits for Trustboard.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the influencer and claim data model, the leaderboard entry
// types, the workspace error enum, and the repository/scorer interfaces.

pub mod claim;
pub mod error;
pub mod influencer;
pub mod leaderboard;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use trustboard_core::Influencer;`

// Influencer types
pub use influencer::{Category, Influencer, InfluencerId, InfluencerProfile, TrustScore};

// Claim types
pub use claim::{Claim, ClaimId, ClaimStatus};

// Leaderboard types
pub use leaderboard::{Direction, LeaderboardEntry, LeaderboardStats, RankedInfluencer};

// Error type
pub use error::TrustboardError;

// Traits
pub use traits::{ClaimCommit, TrustRepository, TrustScorer};
