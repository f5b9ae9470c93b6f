//! Claims domain errors

use core_kernel::{ClaimId, CoreError};
use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Duplicate claim identifier: {0}")]
    DuplicateClaimId(ClaimId),

    #[error("Invalid timeline for claim {claim_id}: {reason}")]
    InvalidTimeline { claim_id: ClaimId, reason: String },

    #[error("Invalid claim {claim_id}: {reason}")]
    InvalidClaim { claim_id: ClaimId, reason: String },

    #[error("Claim source '{name}' failed: {source}")]
    Source {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClaimError {
    pub fn invalid_timeline(claim_id: &ClaimId, reason: impl Into<String>) -> Self {
        ClaimError::InvalidTimeline {
            claim_id: claim_id.clone(),
            reason: reason.into(),
        }
    }

    pub fn invalid_claim(claim_id: &ClaimId, reason: impl Into<String>) -> Self {
        ClaimError::InvalidClaim {
            claim_id: claim_id.clone(),
            reason: reason.into(),
        }
    }

    pub fn source_failed(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ClaimError::Source {
            name: name.into(),
            source: source.into(),
        }
    }
}
