use thiserror::Error;

/// Workspace-wide error type for Trustboard.
#[derive(Debug, Error)]
pub enum TrustboardError {
    /// Malformed claim input, rejected before any mutation.
    #[error("Invalid claim: {0}")]
    InvalidClaim(String),

    /// Malformed request outside claim content (path, query, or profile body).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unknown influencer or claim id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate claim id or an already-superseded claim.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage layer error (snapshot I/O, repository failures).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TrustboardError {
    /// Short machine-readable kind, used in HTTP error bodies and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TrustboardError::InvalidClaim(_) => "invalid_claim",
            TrustboardError::InvalidRequest(_) => "invalid_request",
            TrustboardError::NotFound(_) => "not_found",
            TrustboardError::Conflict(_) => "conflict",
            TrustboardError::Storage(_) => "storage",
            TrustboardError::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for TrustboardError {
    fn from(e: serde_json::Error) -> Self {
        TrustboardError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for TrustboardError {
    fn from(e: std::io::Error) -> Self {
        TrustboardError::Storage(e.to_string())
    }
}
