//! HTTP API Layer
//!
//! This crate provides the REST API for the forest rights claims list using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: stateless claim queries and stateful query sessions
//! - **Store**: bounded in-process registry of query sessions
//! - **Middleware**: request ids, tracing, access logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses, including extractor rejections
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_claims::ClaimCatalog;
//! use infra_dataset::BundledDataset;
//! use interface_api::create_router;
//!
//! let catalog = ClaimCatalog::load(&BundledDataset)?;
//! let app = create_router(catalog, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod store;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimCatalog;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, sessions};
use crate::middleware::access_log;
use crate::store::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ClaimCatalog>,
    pub sessions: SessionStore,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `catalog` - Validated claim catalog served by every route
/// * `config` - API configuration
pub fn create_router(catalog: ClaimCatalog, config: ApiConfig) -> Router {
    let state = AppState {
        catalog: Arc::new(catalog),
        sessions: SessionStore::new(config.max_sessions, config.session_idle_timeout()),
        config,
    };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/summary", get(claims::claims_summary))
        .route("/by-id/*claim_id", get(claims::get_claim));

    let session_routes = Router::new()
        .route("/", post(sessions::create_session))
        .route("/:id", get(sessions::get_session).delete(sessions::delete_session))
        .route(
            "/:id/filters",
            put(sessions::update_filters).delete(sessions::clear_filters),
        )
        .route("/:id/sort", post(sessions::sort_session))
        .route("/:id/page", put(sessions::set_page))
        .route("/:id/summary", get(sessions::session_summary))
        .route("/:id/selection/page", post(sessions::select_page))
        .route("/:id/selection/toggle", post(sessions::toggle_selection))
        .route("/:id/selection", delete(sessions::clear_selection));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/sessions", session_routes)
        .layer(axum_middleware::from_fn(access_log));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
