// crates/trustboard-scoring/src/lib.rs
//
// trustboard-scoring: Trust score engine and recency decay for Trustboard.
//
// Scores are computed from an influencer's claim history: verified claims
// raise the score, refuted claims depress it, unverified claims are ignored.
// Older claims weigh less than recent ones through a configurable decay.

pub mod decay;
pub mod engine;

pub use decay::{apply_decay, DecayFunction};
pub use engine::{ScoringConfig, TrustScoreEngine};
