// crates/trustboard-rpc/src/error.rs
//
// Mapping from service errors to HTTP responses.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use trustboard_core::TrustboardError;

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error kind (e.g. "not_found").
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

/// Error type returned by handlers.
#[derive(Debug)]
pub struct ApiError(pub TrustboardError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            TrustboardError::InvalidClaim(_) | TrustboardError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            TrustboardError::NotFound(_) => StatusCode::NOT_FOUND,
            TrustboardError::Conflict(_) => StatusCode::CONFLICT,
            TrustboardError::Storage(_) | TrustboardError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<TrustboardError> for ApiError {
    fn from(e: TrustboardError) -> Self {
        ApiError(e)
    }
}

impl ApiError {
    /// A rejected claim body. Claim endpoints report these as invalid claims
    /// rather than generic bad requests.
    pub fn invalid_claim(rejection: JsonRejection) -> Self {
        ApiError(TrustboardError::InvalidClaim(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(TrustboardError::InvalidRequest(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(TrustboardError::InvalidRequest(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(TrustboardError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }
        let body = ErrorBody {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
