//! Dataset error types
//!
//! Errors raised while reading and converting claim records, carrying
//! the offending file or record so that a bad dataset can be fixed.

use std::path::PathBuf;

use domain_claims::ClaimError;
use thiserror::Error;

/// Errors that can occur while ingesting a claim dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of claim records
    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A record parsed but violates a claim invariant
    #[error("Invalid record {claim_id}: {source}")]
    InvalidRecord {
        claim_id: String,
        #[source]
        source: ClaimError,
    },
}

impl DatasetError {
    pub fn invalid_record(claim_id: impl Into<String>, source: impl Into<ClaimError>) -> Self {
        DatasetError::InvalidRecord {
            claim_id: claim_id.into(),
            source: source.into(),
        }
    }

    /// Checks if the error points at a specific record
    pub fn is_record_error(&self) -> bool {
        matches!(self, DatasetError::InvalidRecord { .. })
    }
}
