// crates/trustboard-rpc/src/lib.rs
//
// trustboard-rpc: HTTP/JSON server and handlers for Trustboard.
//
// Exposes the leaderboard, influencer, and claim endpoints over axum.
// Handlers are thin: they decode the request, call the service, and map
// `TrustboardError` onto HTTP status codes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

// Re-export the main server type for ergonomic access.
pub use server::{AppState, RpcConfig, TrustboardRpcServer};
