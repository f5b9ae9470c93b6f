//! Test Data Builders
//!
//! Provides builder patterns for constructing test claims with sensible
//! defaults. Tests specify only the relevant fields; the builder derives a
//! timeline consistent with the chosen status unless one is given explicitly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Acres, ClaimId, Confidence, Coordinates};
use domain_claims::{
    Claim, ClaimCategory, ClaimStatus, Document, DocumentStatus, DocumentType, TimelineEntry,
};

use crate::fixtures::DateFixtures;

/// Builder for constructing test claims
#[derive(Debug, Clone)]
pub struct TestClaimBuilder {
    id: String,
    claimant_name: String,
    guardian_name: String,
    village: String,
    district: String,
    state: String,
    category: ClaimCategory,
    area_acres: Decimal,
    filing_date: NaiveDate,
    status: ClaimStatus,
    status_date: Option<NaiveDate>,
    gram_sabha: Option<String>,
    tribe: String,
    coordinates: (f64, f64),
    confidence_score: Decimal,
    documents: Option<Vec<Document>>,
    timeline: Option<Vec<TimelineEntry>>,
}

impl TestClaimBuilder {
    /// Creates a builder for the given claim identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            claimant_name: "Test Claimant".to_string(),
            guardian_name: "Test Guardian".to_string(),
            village: "Khermai".to_string(),
            district: "Betul".to_string(),
            state: "Madhya Pradesh".to_string(),
            category: ClaimCategory::Ifr,
            area_acres: dec!(1.0),
            filing_date: DateFixtures::filing_date(),
            status: ClaimStatus::FiledAtGs,
            status_date: None,
            gram_sabha: None,
            tribe: "Gond".to_string(),
            coordinates: (77.8945, 21.9078),
            confidence_score: dec!(0.85),
            documents: None,
            timeline: None,
        }
    }

    pub fn claimant(mut self, name: impl Into<String>) -> Self {
        self.claimant_name = name.into();
        self
    }

    pub fn guardian(mut self, name: impl Into<String>) -> Self {
        self.guardian_name = name.into();
        self
    }

    pub fn village(mut self, village: impl Into<String>) -> Self {
        self.village = village.into();
        self
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn category(mut self, category: ClaimCategory) -> Self {
        self.category = category;
        self
    }

    pub fn area(mut self, acres: Decimal) -> Self {
        self.area_acres = acres;
        self
    }

    pub fn filed_on(mut self, date: NaiveDate) -> Self {
        self.filing_date = date;
        self
    }

    pub fn status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn status_date(mut self, date: NaiveDate) -> Self {
        self.status_date = Some(date);
        self
    }

    pub fn gram_sabha(mut self, gram_sabha: impl Into<String>) -> Self {
        self.gram_sabha = Some(gram_sabha.into());
        self
    }

    pub fn tribe(mut self, tribe: impl Into<String>) -> Self {
        self.tribe = tribe.into();
        self
    }

    pub fn coordinates(mut self, longitude: f64, latitude: f64) -> Self {
        self.coordinates = (longitude, latitude);
        self
    }

    pub fn confidence(mut self, score: Decimal) -> Self {
        self.confidence_score = score;
        self
    }

    pub fn documents(mut self, documents: Vec<Document>) -> Self {
        self.documents = Some(documents);
        self
    }

    pub fn timeline(mut self, timeline: Vec<TimelineEntry>) -> Self {
        self.timeline = Some(timeline);
        self
    }

    /// Builds the claim
    ///
    /// # Panics
    ///
    /// Panics if a field value violates a value-type invariant (negative
    /// area, confidence outside [0, 1], blank id, bad coordinates).
    pub fn build(self) -> Claim {
        let status_date = self.status_date.unwrap_or(self.filing_date);
        let confidence = Confidence::new(self.confidence_score).expect("confidence in [0, 1]");
        let timeline = self
            .timeline
            .unwrap_or_else(|| default_timeline(self.status, self.filing_date, status_date));
        let documents = self.documents.unwrap_or_else(|| default_documents(confidence));

        Claim {
            id: ClaimId::new(self.id).expect("non-blank claim id"),
            claimant_name: self.claimant_name,
            guardian_name: self.guardian_name,
            gram_sabha: self
                .gram_sabha
                .unwrap_or_else(|| format!("{} Gram Sabha", self.village)),
            village: self.village,
            district: self.district,
            state: self.state,
            category: self.category,
            area_acres: Acres::new(self.area_acres).expect("non-negative area"),
            filing_date: self.filing_date,
            status: self.status,
            status_date,
            tribe: self.tribe,
            coordinates: Coordinates::new(self.coordinates.0, self.coordinates.1)
                .expect("valid coordinates"),
            confidence_score: confidence,
            documents,
            timeline,
        }
    }
}

/// Timeline walking the progression up to `status`
pub fn default_timeline(
    status: ClaimStatus,
    filing_date: NaiveDate,
    status_date: NaiveDate,
) -> Vec<TimelineEntry> {
    let stages: Vec<ClaimStatus> = match status {
        ClaimStatus::Rejected => vec![ClaimStatus::FiledAtGs, ClaimStatus::Rejected],
        _ => ClaimStatus::ALL
            .into_iter()
            .filter(|s| s.stage().is_some() && *s <= status)
            .collect(),
    };

    let last = stages.len().saturating_sub(1);
    stages
        .into_iter()
        .enumerate()
        .map(|(i, stage)| {
            let date = if i == last && i > 0 { status_date } else { filing_date };
            TimelineEntry::new(stage, date, officer_for(stage))
        })
        .collect()
}

fn officer_for(stage: ClaimStatus) -> &'static str {
    match stage {
        ClaimStatus::FiledAtGs => "Sarpanch",
        ClaimStatus::VerifiedByFrc => "FRC Secretary",
        ClaimStatus::PendingAtSdlc => "SDLC",
        ClaimStatus::ApprovedByDlc | ClaimStatus::Rejected => "District Collector",
    }
}

fn default_documents(confidence: Confidence) -> Vec<Document> {
    vec![
        Document::new(DocumentType::FormA, DocumentStatus::Verified, confidence),
        Document::new(DocumentType::SketchMap, DocumentStatus::Georeferenced, confidence),
        Document::new(DocumentType::EvidenceDoc, DocumentStatus::Pending, confidence),
    ]
}
