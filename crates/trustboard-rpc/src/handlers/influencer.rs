// crates/trustboard-rpc/src/handlers/influencer.rs
//
// Influencer handlers: GetInfluencer, UpdateProfile, Deactivate, ListClaims.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use trustboard_core::{Claim, Influencer, InfluencerId, InfluencerProfile};

use crate::error::ApiError;
use crate::server::AppState;

/// An influencer record with its current leaderboard rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerView {
    #[serde(flatten)]
    pub influencer: Influencer,
    /// Descending rank; absent for deactivated influencers.
    pub rank: Option<usize>,
}

/// Handle a GetInfluencer request.
pub async fn handle_get_influencer(
    State(state): State<AppState>,
    id: Result<Path<InfluencerId>, PathRejection>,
) -> Result<Json<InfluencerView>, ApiError> {
    let Path(id) = id?;
    let influencer = state.service.query.get_by_id(id).await?;
    let rank = state.service.query.rank_of(id).await;
    Ok(Json(InfluencerView { influencer, rank }))
}

/// Handle an UpdateProfile request. Only fields present in the body change.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    id: Result<Path<InfluencerId>, PathRejection>,
    body: Result<Json<InfluencerProfile>, JsonRejection>,
) -> Result<Json<Influencer>, ApiError> {
    let Path(id) = id?;
    let Json(profile) = body?;
    let influencer = state.service.ingest.update_profile(id, profile).await?;
    Ok(Json(influencer))
}

/// Handle a Deactivate request: the influencer leaves the leaderboard.
pub async fn handle_deactivate(
    State(state): State<AppState>,
    id: Result<Path<InfluencerId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.service.ingest.deactivate_influencer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Response listing an influencer's claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListClaimsResponse {
    pub influencer_id: InfluencerId,
    /// Claims in ingestion order, superseded ones included.
    pub claims: Vec<Claim>,
}

/// Handle a ListClaims request.
pub async fn handle_list_claims(
    State(state): State<AppState>,
    id: Result<Path<InfluencerId>, PathRejection>,
) -> Result<Json<ListClaimsResponse>, ApiError> {
    let Path(id) = id?;
    let claims = state.service.query.claims_for(id).await?;
    Ok(Json(ListClaimsResponse {
        influencer_id: id,
        claims,
    }))
}
