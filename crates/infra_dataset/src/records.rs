//! Claim records in the field-dataset JSON shape
//!
//! The dataset names a few fields differently from the domain model
//! (`claim_id`, `father_name`, `claim_type`) and carries plain numbers for
//! areas and scores. Records are converted into validated claims here.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::{Acres, ClaimId, Confidence, Coordinates};
use domain_claims::{
    Claim, ClaimCategory, ClaimError, ClaimStatus, Document, DocumentStatus, DocumentType,
    TimelineEntry,
};

use crate::error::DatasetError;

/// One supporting document as stored in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    pub confidence: Decimal,
}

/// One claim as stored in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub claim_id: String,
    pub claimant_name: String,
    pub father_name: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub claim_type: ClaimCategory,
    pub area_acres: Decimal,
    pub filing_date: NaiveDate,
    pub status: ClaimStatus,
    pub status_date: NaiveDate,
    pub gram_sabha: String,
    pub tribe: String,
    /// `[longitude, latitude]`
    pub coordinates: (f64, f64),
    pub confidence_score: Decimal,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl ClaimRecord {
    /// Converts the record into a claim, checking every invariant
    pub fn into_claim(self) -> Result<Claim, DatasetError> {
        let record_id = self.claim_id.clone();
        self.try_into_claim()
            .map_err(|source| DatasetError::invalid_record(record_id, source))
    }

    fn try_into_claim(self) -> Result<Claim, ClaimError> {
        let documents = self
            .documents
            .into_iter()
            .map(|d| -> Result<Document, ClaimError> {
                Ok(Document::new(
                    d.document_type,
                    d.status,
                    Confidence::new(d.confidence)?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let claim = Claim {
            id: ClaimId::new(self.claim_id)?,
            claimant_name: self.claimant_name,
            guardian_name: self.father_name,
            village: self.village,
            district: self.district,
            state: self.state,
            category: self.claim_type,
            area_acres: Acres::new(self.area_acres)?,
            filing_date: self.filing_date,
            status: self.status,
            status_date: self.status_date,
            gram_sabha: self.gram_sabha,
            tribe: self.tribe,
            coordinates: Coordinates::new(self.coordinates.0, self.coordinates.1)?,
            confidence_score: Confidence::new(self.confidence_score)?,
            documents,
            timeline: self.timeline,
        };
        claim.validate()?;
        Ok(claim)
    }
}

impl From<&Claim> for ClaimRecord {
    fn from(claim: &Claim) -> Self {
        Self {
            claim_id: claim.id.as_str().to_string(),
            claimant_name: claim.claimant_name.clone(),
            father_name: claim.guardian_name.clone(),
            village: claim.village.clone(),
            district: claim.district.clone(),
            state: claim.state.clone(),
            claim_type: claim.category,
            area_acres: claim.area_acres.value(),
            filing_date: claim.filing_date,
            status: claim.status,
            status_date: claim.status_date,
            gram_sabha: claim.gram_sabha.clone(),
            tribe: claim.tribe.clone(),
            coordinates: claim.coordinates.into(),
            confidence_score: claim.confidence_score.value(),
            documents: claim
                .documents
                .iter()
                .map(|d| DocumentRecord {
                    document_type: d.document_type,
                    status: d.status,
                    confidence: d.confidence.value(),
                })
                .collect(),
            timeline: claim.timeline.clone(),
        }
    }
}

/// Parses a JSON array of claim records into validated claims
///
/// Fails on the first record that does not convert; the error names it.
pub fn parse_claims(json: &str) -> Result<Vec<Claim>, DatasetError> {
    let records: Vec<ClaimRecord> = serde_json::from_str(json)?;
    debug!(records = records.len(), "Parsed claim records");

    records
        .into_iter()
        .map(|record| {
            record.into_claim().inspect_err(|err| {
                warn!(error = %err, "Rejected claim record");
            })
        })
        .collect()
}
