//! Claims DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use validator::Validate;

use core_kernel::{ClaimId, Coordinates};
use domain_claims::query::criteria::{DEFAULT_AREA_MAX, DEFAULT_AREA_MIN};
use domain_claims::workflow::next_statuses;
use domain_claims::{
    AreaRange, Claim, ClaimCategory, ClaimStatus, ClaimsSummary, DateRange, Document,
    DocumentStatus, DocumentType, FilterCriteria, PageInfo, QualityTier, SortDirection, SortField,
    SortState, TimelineEntry,
};

/// Largest page a client may request
pub const MAX_PAGE_SIZE: usize = 500;

/// Filter fields shared by query strings and session filter updates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FilterParams {
    #[validate(length(max = 200))]
    pub search: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
    pub category: Option<ClaimCategory>,
    pub status: Option<ClaimStatus>,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub area_min: Option<Decimal>,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub area_max: Option<Decimal>,
    pub filed_from: Option<NaiveDate>,
    pub filed_to: Option<NaiveDate>,
    pub quality: Option<QualityTier>,
}

impl FilterParams {
    /// Criteria with unset fields left at their defaults
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            state: self.state.clone(),
            district: self.district.clone(),
            village: self.village.clone(),
            category: self.category,
            status: self.status,
            area_range: AreaRange::new(
                self.area_min.unwrap_or(DEFAULT_AREA_MIN),
                self.area_max.unwrap_or(DEFAULT_AREA_MAX),
            ),
            date_range: DateRange::new(self.filed_from, self.filed_to),
            quality: self.quality,
        }
    }
}

impl From<&FilterCriteria> for FilterParams {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            search: Some(criteria.search.clone()).filter(|s| !s.is_empty()),
            state: criteria.state.clone(),
            district: criteria.district.clone(),
            village: criteria.village.clone(),
            category: criteria.category,
            status: criteria.status,
            area_min: Some(criteria.area_range.min),
            area_max: Some(criteria.area_range.max),
            filed_from: criteria.date_range.from,
            filed_to: criteria.date_range.to,
            quality: criteria.quality,
        }
    }
}

/// Query string of `GET /api/v1/claims`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ClaimsQuery {
    #[validate(length(max = 200))]
    pub search: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
    pub category: Option<ClaimCategory>,
    pub status: Option<ClaimStatus>,
    pub area_min: Option<Decimal>,
    pub area_max: Option<Decimal>,
    pub filed_from: Option<NaiveDate>,
    pub filed_to: Option<NaiveDate>,
    pub quality: Option<QualityTier>,
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 500))]
    pub page_size: Option<usize>,
}

impl ClaimsQuery {
    pub fn filters(&self) -> FilterParams {
        FilterParams {
            search: self.search.clone(),
            state: self.state.clone(),
            district: self.district.clone(),
            village: self.village.clone(),
            category: self.category,
            status: self.status,
            area_min: self.area_min,
            area_max: self.area_max,
            filed_from: self.filed_from,
            filed_to: self.filed_to,
            quality: self.quality,
        }
    }

    /// Requested sort; a field without a direction sorts ascending
    pub fn sort_state(&self) -> SortState {
        match self.sort {
            Some(field) => SortState::new(field, self.direction.unwrap_or_default()),
            None => {
                let mut state = SortState::default();
                if let Some(direction) = self.direction {
                    state.direction = direction;
                }
                state
            }
        }
    }

    pub fn page(&self) -> NonZeroUsize {
        self.page.and_then(NonZeroUsize::new).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn page_size(&self, default: NonZeroUsize) -> NonZeroUsize {
        self.page_size
            .and_then(|size| NonZeroUsize::new(size.min(MAX_PAGE_SIZE)))
            .unwrap_or(default)
    }
}

/// A row of the claims table
#[derive(Debug, Clone, Serialize)]
pub struct ClaimResponse {
    pub claim_id: ClaimId,
    pub claimant_name: String,
    pub father_name: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub claim_type: ClaimCategory,
    #[serde(with = "rust_decimal::serde::float")]
    pub area_acres: Decimal,
    pub filing_date: NaiveDate,
    pub status: ClaimStatus,
    pub status_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence_score: Decimal,
    pub confidence_percent: u8,
    pub quality: QualityTier,
}

impl From<&Claim> for ClaimResponse {
    fn from(claim: &Claim) -> Self {
        Self {
            claim_id: claim.id.clone(),
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
            confidence_score: claim.confidence_score.value(),
            confidence_percent: claim.confidence_score.percent(),
            quality: claim.quality_tier(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
    pub confidence_percent: u8,
}

impl From<&Document> for DocumentResponse {
    fn from(document: &Document) -> Self {
        Self {
            document_type: document.document_type,
            status: document.status,
            confidence: document.confidence.value(),
            confidence_percent: document.confidence.percent(),
        }
    }
}

/// Everything the claim preview panel shows
#[derive(Debug, Clone, Serialize)]
pub struct ClaimDetailResponse {
    #[serde(flatten)]
    pub claim: ClaimResponse,
    pub gram_sabha: String,
    pub tribe: String,
    pub coordinates: Coordinates,
    #[serde(with = "rust_decimal::serde::float")]
    pub area_hectares: Decimal,
    pub processing_days: i64,
    pub documents: Vec<DocumentResponse>,
    pub timeline: Vec<TimelineEntry>,
    pub next_statuses: Vec<ClaimStatus>,
}

impl From<&Claim> for ClaimDetailResponse {
    fn from(claim: &Claim) -> Self {
        Self {
            claim: ClaimResponse::from(claim),
            gram_sabha: claim.gram_sabha.clone(),
            tribe: claim.tribe.clone(),
            coordinates: claim.coordinates,
            area_hectares: claim.area_acres.to_hectares(),
            processing_days: claim.processing_days(),
            documents: claim.documents.iter().map(DocumentResponse::from).collect(),
            timeline: claim.timeline.clone(),
            next_statuses: next_statuses(claim.status),
        }
    }
}

/// One page of a stateless query
#[derive(Debug, Clone, Serialize)]
pub struct ClaimsPageResponse {
    pub claims: Vec<ClaimResponse>,
    pub page: PageInfo,
    pub sort: SortState,
    pub filters: FilterParams,
    pub active_filters: usize,
}

/// Header statistics
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub total: usize,
    pub showing: usize,
    pub selected: usize,
    pub pending_review: usize,
    pub approved_recently: usize,
    pub rejection_rate_percent: u32,
    pub by_status: BTreeMap<ClaimStatus, usize>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_area_acres: Decimal,
    pub as_of: NaiveDate,
}

impl SummaryResponse {
    pub fn new(summary: ClaimsSummary, as_of: NaiveDate) -> Self {
        Self {
            total: summary.total,
            showing: summary.showing,
            selected: summary.selected,
            pending_review: summary.pending_review,
            approved_recently: summary.approved_recently,
            rejection_rate_percent: summary.rejection_rate_percent,
            by_status: summary.by_status,
            total_area_acres: summary.total_area.value(),
            as_of,
        }
    }
}
