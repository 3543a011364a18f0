// crates/trustboard-store/src/lib.rs
//
// trustboard-store: Storage layer for Trustboard.
//
// Provides an in-memory repository implementing `TrustRepository`, JSON
// snapshot persistence for that repository, and the ordered leaderboard
// index used to answer ranked queries without re-sorting.

pub mod leaderboard;
pub mod memory;
pub mod snapshot;

// Re-export key types for ergonomic access from downstream crates.
pub use leaderboard::LeaderboardIndex;
pub use memory::InMemoryRepository;
pub use snapshot::Snapshot;
