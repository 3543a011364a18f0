// crates/trustboard-rpc/src/handlers/node.rs
//
// Node handlers: GetHealth.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;

/// Response from a health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the server answers.
    pub status: String,
    /// Crate version of the server.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}

/// Handle a GetHealth request.
pub async fn handle_get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
