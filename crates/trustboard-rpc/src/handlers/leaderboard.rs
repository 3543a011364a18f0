// crates/trustboard-rpc/src/handlers/leaderboard.rs
//
// Leaderboard handlers: GetLeaderboard, GetStats.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use trustboard_core::{Direction, LeaderboardStats};
use trustboard_service::LeaderboardPage;

use crate::error::ApiError;
use crate::server::AppState;

/// Page size when the caller does not pass `limit`.
pub const DEFAULT_LIMIT: usize = 10;
/// Largest page a single request may ask for.
pub const MAX_LIMIT: usize = 1000;

// ---------------------------------------------------------------------------
// GetLeaderboard
// ---------------------------------------------------------------------------

/// Query string for the leaderboard endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    /// `desc` (default) or `asc`; `highestFirst`/`lowestFirst` also accepted.
    pub direction: Option<Direction>,
    /// Number of entries to return (default 10, at most 1000).
    pub limit: Option<usize>,
}

/// Handle a GetLeaderboard request.
pub async fn handle_get_leaderboard(
    State(state): State<AppState>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Result<Json<LeaderboardPage>, ApiError> {
    let Query(query) = query?;
    let direction = query.direction.unwrap_or_default();
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let page = state.service.query.get_page(limit, direction).await?;
    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// GetStats
// ---------------------------------------------------------------------------

/// Handle a GetStats request: counts and average score of active influencers.
pub async fn handle_get_stats(State(state): State<AppState>) -> Result<Json<LeaderboardStats>, ApiError> {
    Ok(Json(state.service.query.stats().await?))
}
