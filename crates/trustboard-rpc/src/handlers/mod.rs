// crates/trustboard-rpc/src/handlers/mod.rs
//
// Handler modules for all HTTP endpoints.
// Each module defines request/response types and handler functions
// for a specific resource.

pub mod claim;
pub mod influencer;
pub mod leaderboard;
pub mod node;
