// crates/trustboard-rpc/src/handlers/claim.rs
//
// Claim handlers: SubmitClaim, GetClaim, SettleClaim.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use trustboard_core::{Claim, ClaimId, ClaimStatus};
use trustboard_service::{ClaimReceipt, ClaimSubmission};

use crate::error::ApiError;
use crate::server::AppState;

// ---------------------------------------------------------------------------
// SubmitClaim
// ---------------------------------------------------------------------------

/// Handle a SubmitClaim request.
///
/// Responds 201 once the claim is committed and the leaderboard reflects
/// the new score. Malformed claim bodies are reported as invalid claims.
pub async fn handle_submit_claim(
    State(state): State<AppState>,
    body: Result<Json<ClaimSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<ClaimReceipt>), ApiError> {
    let Json(submission) = body.map_err(ApiError::invalid_claim)?;
    let receipt = state.service.ingest.submit_claim(submission).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

// ---------------------------------------------------------------------------
// GetClaim
// ---------------------------------------------------------------------------

/// Handle a GetClaim request.
pub async fn handle_get_claim(
    State(state): State<AppState>,
    id: Result<Path<ClaimId>, PathRejection>,
) -> Result<Json<Claim>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.service.query.get_claim(&id).await?))
}

// ---------------------------------------------------------------------------
// SettleClaim
// ---------------------------------------------------------------------------

/// Request to settle an unverified claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleClaimRequest {
    /// `verified` or `refuted`.
    pub status: ClaimStatus,
}

/// Handle a SettleClaim request.
pub async fn handle_settle_claim(
    State(state): State<AppState>,
    id: Result<Path<ClaimId>, PathRejection>,
    body: Result<Json<SettleClaimRequest>, JsonRejection>,
) -> Result<Json<ClaimReceipt>, ApiError> {
    let Path(id) = id?;
    let Json(request) = body.map_err(ApiError::invalid_claim)?;
    let receipt = state.service.ingest.settle_claim(&id, request.status).await?;
    Ok(Json(receipt))
}
