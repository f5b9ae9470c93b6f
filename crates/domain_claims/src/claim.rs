//! Claim aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Acres, ClaimId, Confidence, Coordinates};
use crate::document::{Document, DocumentType, QualityTier};
use crate::error::ClaimError;
use crate::workflow::{self, TimelineEntry};

/// Claim status, in workflow order
///
/// ```text
/// FILED_AT_GS -> VERIFIED_BY_FRC -> PENDING_AT_SDLC -> APPROVED_BY_DLC
///      \______________\_________________\______________-> REJECTED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Filed at the Gram Sabha
    FiledAtGs,
    /// Verified by the Forest Rights Committee
    VerifiedByFrc,
    /// Awaiting the Sub-Divisional Level Committee
    PendingAtSdlc,
    /// Approved by the District Level Committee
    ApprovedByDlc,
    /// Rejected at any stage
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 5] = [
        ClaimStatus::FiledAtGs,
        ClaimStatus::VerifiedByFrc,
        ClaimStatus::PendingAtSdlc,
        ClaimStatus::ApprovedByDlc,
        ClaimStatus::Rejected,
    ];

    /// Position in the progression; `None` for `Rejected`
    pub fn stage(&self) -> Option<u8> {
        match self {
            ClaimStatus::FiledAtGs => Some(0),
            ClaimStatus::VerifiedByFrc => Some(1),
            ClaimStatus::PendingAtSdlc => Some(2),
            ClaimStatus::ApprovedByDlc => Some(3),
            ClaimStatus::Rejected => None,
        }
    }

    /// Approved and rejected claims accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::ApprovedByDlc | ClaimStatus::Rejected)
    }

    /// Awaiting a committee decision
    pub fn is_pending_review(&self) -> bool {
        matches!(self, ClaimStatus::VerifiedByFrc | ClaimStatus::PendingAtSdlc)
    }

    /// Checks if a transition is valid
    ///
    /// Forward moves may skip stages; any open claim may be rejected.
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match (self.stage(), target.stage()) {
            (Some(_), None) => true,
            (Some(from), Some(to)) => to > from,
            (None, _) => false,
        }
    }

    /// Wire code, e.g. `PENDING_AT_SDLC`
    pub fn code(&self) -> &'static str {
        match self {
            ClaimStatus::FiledAtGs => "FILED_AT_GS",
            ClaimStatus::VerifiedByFrc => "VERIFIED_BY_FRC",
            ClaimStatus::PendingAtSdlc => "PENDING_AT_SDLC",
            ClaimStatus::ApprovedByDlc => "APPROVED_BY_DLC",
            ClaimStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::FiledAtGs => "Filed at Gram Sabha",
            ClaimStatus::VerifiedByFrc => "Verified by FRC",
            ClaimStatus::PendingAtSdlc => "Pending at SDLC",
            ClaimStatus::ApprovedByDlc => "Approved by DLC",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Category of right being claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimCategory {
    /// Individual Forest Rights
    Ifr,
    /// Community Rights
    Cr,
    /// Community Forest Resource Rights
    Cfr,
}

impl ClaimCategory {
    pub const ALL: [ClaimCategory; 3] = [ClaimCategory::Ifr, ClaimCategory::Cr, ClaimCategory::Cfr];

    pub fn code(&self) -> &'static str {
        match self {
            ClaimCategory::Ifr => "IFR",
            ClaimCategory::Cr => "CR",
            ClaimCategory::Cfr => "CFR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimCategory::Ifr => "Individual Forest Rights",
            ClaimCategory::Cr => "Community Rights",
            ClaimCategory::Cfr => "Community Forest Resource Rights",
        }
    }
}

impl fmt::Display for ClaimCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A forest-rights claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Claimant name
    pub claimant_name: String,
    /// Father's or guardian's name
    pub guardian_name: String,
    pub village: String,
    pub district: String,
    pub state: String,
    /// Category of right claimed
    pub category: ClaimCategory,
    /// Claimed area
    pub area_acres: Acres,
    /// Date the claim was filed at the Gram Sabha
    pub filing_date: NaiveDate,
    /// Current status
    pub status: ClaimStatus,
    /// Date the current status was reached
    pub status_date: NaiveDate,
    /// Originating Gram Sabha
    pub gram_sabha: String,
    /// Tribal affiliation of the claimant
    pub tribe: String,
    /// Plot location
    pub coordinates: Coordinates,
    /// Aggregate document confidence
    pub confidence_score: Confidence,
    /// Supporting documents
    pub documents: Vec<Document>,
    /// Status history, oldest first
    pub timeline: Vec<TimelineEntry>,
}

impl Claim {
    /// Checks the invariants that the field types cannot express
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.status_date < self.filing_date {
            return Err(ClaimError::invalid_claim(
                &self.id,
                format!(
                    "status date {} precedes filing date {}",
                    self.status_date, self.filing_date
                ),
            ));
        }
        workflow::validate_timeline(self.status, &self.timeline)
            .map_err(|reason| ClaimError::invalid_timeline(&self.id, reason))
    }

    /// Document-quality tier of the aggregate confidence score
    pub fn quality_tier(&self) -> QualityTier {
        QualityTier::of(self.confidence_score)
    }

    /// Days elapsed between filing and the current status
    pub fn processing_days(&self) -> i64 {
        (self.status_date - self.filing_date).num_days()
    }

    /// Whether the claim awaits a committee decision
    pub fn is_pending_review(&self) -> bool {
        self.status.is_pending_review()
    }

    /// Finds the first document of the given type
    pub fn document(&self, document_type: DocumentType) -> Option<&Document> {
        self.documents.iter().find(|d| d.document_type == document_type)
    }

    /// Number of documents still awaiting processing
    pub fn pending_documents(&self) -> usize {
        self.documents.iter().filter(|d| !d.status.is_complete()).count()
    }

    /// Most recent timeline entry
    pub fn latest_entry(&self) -> Option<&TimelineEntry> {
        self.timeline.last()
    }
}
