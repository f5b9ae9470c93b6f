//! Query session handlers
//!
//! A session keeps criteria, sort, page and selection between requests,
//! mirroring one user's claims table.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::num::NonZeroUsize;
use validator::Validate;

use core_kernel::SessionId;
use domain_claims::{ClaimsSummary, QuerySession, SortState};

use crate::dto::claims::{FilterParams, SummaryResponse};
use crate::dto::sessions::*;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::{error::ApiError, AppState};

/// Opens a session over the full catalog
pub async fn create_session(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    request.validate()?;

    let page_size = request
        .page_size
        .and_then(NonZeroUsize::new)
        .unwrap_or_else(|| state.config.default_page_size());
    let session = QuerySession::new(state.catalog.shared(), page_size);

    let id = state.sessions.insert(session).await?;
    let response = state
        .sessions
        .read(id, |session| SessionResponse::new(id, session))
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .read(id, |session| SessionResponse::new(id, session))
        .await?;
    Ok(Json(response))
}

pub async fn delete_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replaces the filters and returns to the first page
pub async fn update_filters(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
    ApiJson(filters): ApiJson<FilterParams>,
) -> Result<Json<SessionResponse>, ApiError> {
    filters.validate()?;

    let response = state
        .sessions
        .update(id, |session| {
            session.set_criteria(filters.to_criteria());
            Ok(SessionResponse::new(id, session))
        })
        .await?;
    Ok(Json(response))
}

pub async fn clear_filters(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .update(id, |session| {
            session.clear_filters();
            Ok(SessionResponse::new(id, session))
        })
        .await?;
    Ok(Json(response))
}

pub async fn sort_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
    ApiJson(request): ApiJson<SortRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .update(id, |session| {
            match request.direction {
                Some(direction) => session.set_sort(SortState::new(request.field, direction)),
                None => session.sort_by(request.field),
            }
            Ok(SessionResponse::new(id, session))
        })
        .await?;
    Ok(Json(response))
}

/// Moves to a page, clamped to the pages available
pub async fn set_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
    ApiJson(request): ApiJson<PageRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    request.validate()?;

    let response = state
        .sessions
        .update(id, |session| {
            session.go_to_page(request.page);
            Ok(SessionResponse::new(id, session))
        })
        .await?;
    Ok(Json(response))
}

pub async fn select_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
) -> Result<Json<PageSelectionResponse>, ApiError> {
    let response = state
        .sessions
        .update(id, |session| {
            let added = session.select_all_on_page();
            Ok(PageSelectionResponse {
                added,
                selected_count: session.selected_count(),
                selected: session.selected_ids().cloned().collect(),
            })
        })
        .await?;
    Ok(Json(response))
}

pub async fn toggle_selection(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
    ApiJson(request): ApiJson<ToggleSelectionRequest>,
) -> Result<Json<ToggleSelectionResponse>, ApiError> {
    let response = state
        .sessions
        .update(id, |session| {
            let selected = session.toggle_selection(&request.claim_id)?;
            Ok(ToggleSelectionResponse {
                claim_id: request.claim_id,
                selected,
                selected_count: session.selected_count(),
            })
        })
        .await?;
    Ok(Json(response))
}

pub async fn clear_selection(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .update(id, |session| {
            session.deselect_all();
            Ok(SessionResponse::new(id, session))
        })
        .await?;
    Ok(Json(response))
}

/// Header statistics for the session's current view
pub async fn session_summary(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<SessionId>,
    ApiQuery(query): ApiQuery<SummaryQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let as_of = query.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let claims = state.catalog.claims();
    let summary = state
        .sessions
        .read(id, |session| {
            ClaimsSummary::compute(claims, session.filtered_count(), session.selected_count(), as_of)
        })
        .await?;
    Ok(Json(SummaryResponse::new(summary, as_of)))
}
