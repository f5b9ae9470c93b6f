//! Query session DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ClaimId, SessionId};
use domain_claims::{PageInfo, QuerySession, SortDirection, SortField, SortState};

use super::claims::{ClaimResponse, FilterParams};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateSessionRequest {
    #[validate(range(min = 1, max = 500))]
    pub page_size: Option<usize>,
}

/// Column-header click when `direction` is absent, explicit sort otherwise
#[derive(Debug, Clone, Deserialize)]
pub struct SortRequest {
    pub field: SortField,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageRequest {
    #[validate(range(min = 1))]
    pub page: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleSelectionRequest {
    pub claim_id: ClaimId,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummaryQuery {
    /// Reference day for "approved recently"; today when absent
    pub as_of: Option<NaiveDate>,
}

/// Current state of a query session
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub claims: Vec<ClaimResponse>,
    pub page: PageInfo,
    pub sort: SortState,
    pub filters: FilterParams,
    pub active_filters: usize,
    pub total_claims: usize,
    pub selected: Vec<ClaimId>,
    /// Header checkbox state: every row on the page is selected
    pub page_selected: bool,
}

impl SessionResponse {
    pub fn new(session_id: SessionId, session: &QuerySession) -> Self {
        let view = session.view();
        Self {
            session_id,
            claims: view.claims.iter().map(ClaimResponse::from).collect(),
            page: view.page,
            sort: view.sort,
            filters: FilterParams::from(&view.criteria),
            active_filters: view.active_filters,
            total_claims: view.total_claims,
            selected: view.selected,
            page_selected: session.selection().covers(session.current_page()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSelectionResponse {
    pub added: usize,
    pub selected_count: usize,
    pub selected: Vec<ClaimId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleSelectionResponse {
    pub claim_id: ClaimId,
    pub selected: bool,
    pub selected_count: usize,
}
