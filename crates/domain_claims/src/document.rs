//! Supporting documents attached to a claim

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Confidence;

/// Type of supporting document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Form A application
    FormA,
    /// Hand-drawn or surveyed sketch map of the claimed plot
    SketchMap,
    /// Evidence of occupation (residence proof, elders' statements, ...)
    EvidenceDoc,
}

/// Processing status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Verified,
    Georeferenced,
    Processed,
    Pending,
}

impl DocumentStatus {
    /// True once the document has gone through digitisation
    pub fn is_complete(&self) -> bool {
        !matches!(self, DocumentStatus::Pending)
    }
}

/// A document owned by a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    pub confidence: Confidence,
}

impl Document {
    pub fn new(document_type: DocumentType, status: DocumentStatus, confidence: Confidence) -> Self {
        Self {
            document_type,
            status,
            confidence,
        }
    }
}

/// Document-quality tier derived from a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Below 70%
    Low,
    /// 70% to 90% inclusive
    Medium,
    /// Above 90%
    High,
}

impl QualityTier {
    pub const ALL: [QualityTier; 3] = [QualityTier::High, QualityTier::Medium, QualityTier::Low];

    /// Classifies a confidence score
    pub fn of(confidence: Confidence) -> Self {
        let value = confidence.value();
        if value > dec!(0.90) {
            QualityTier::High
        } else if value >= dec!(0.70) {
            QualityTier::Medium
        } else {
            QualityTier::Low
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            QualityTier::High => "high",
            QualityTier::Medium => "medium",
            QualityTier::Low => "low",
        }
    }
}
