//! Claims handlers
//!
//! Stateless queries over the catalog: every request carries its own
//! criteria, sort and page.

use axum::{
    extract::State,
    Json,
};
use chrono::Utc;
use tracing::debug;
use validator::Validate;

use core_kernel::ClaimId;
use domain_claims::{ClaimsQueryEngine, ClaimsSummary, PageInfo};

use crate::dto::claims::*;
use crate::dto::sessions::SummaryQuery;
use crate::extract::{ApiPath, ApiQuery};
use crate::{error::ApiError, AppState};

/// Lists one page of filtered, sorted claims
pub async fn list_claims(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ClaimsQuery>,
) -> Result<Json<ClaimsPageResponse>, ApiError> {
    query.validate()?;

    let filters = query.filters();
    let criteria = filters.to_criteria();
    let sort = query.sort_state();
    let page = query.page();
    let page_size = query.page_size(state.config.default_page_size());

    let derived = ClaimsQueryEngine::derive(state.catalog.claims(), &criteria, sort);
    let rows = ClaimsQueryEngine::paginate(&derived, page, page_size);
    debug!(
        matched = derived.len(),
        page = page.get(),
        sort = %sort.field,
        "Claims query"
    );

    Ok(Json(ClaimsPageResponse {
        claims: rows.iter().map(ClaimResponse::from).collect(),
        page: PageInfo::new(derived.len(), page, page_size),
        sort,
        active_filters: criteria.active_filter_count(),
        filters,
    }))
}

/// Gets a claim by its register identifier
pub async fn get_claim(
    State(state): State<AppState>,
    ApiPath(claim_id): ApiPath<String>,
) -> Result<Json<ClaimDetailResponse>, ApiError> {
    let id = ClaimId::new(claim_id)?;
    let claim = state.catalog.require(&id)?;
    Ok(Json(ClaimDetailResponse::from(claim)))
}

/// Header statistics over the whole catalog
pub async fn claims_summary(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SummaryQuery>,
) -> Json<SummaryResponse> {
    let as_of = query.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let claims = state.catalog.claims();
    let summary = ClaimsSummary::compute(claims, claims.len(), 0, as_of);
    Json(SummaryResponse::new(summary, as_of))
}
