//! HTTP API tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_claims::ClaimCatalog;
use interface_api::{config::ApiConfig, create_router};

use test_utils::ClaimFixtures;

fn app_with(config: ApiConfig) -> Router {
    let catalog = ClaimCatalog::new(ClaimFixtures::sample_register()).unwrap();
    create_router(catalog, config)
}

fn app() -> Router {
    app_with(ApiConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn ids(body: &Value) -> Vec<String> {
    body["claims"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["claim_id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get(&app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_catalog() {
        let (status, body) = get(&app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["claims"], 5);
        assert_eq!(body["sessions"], 0);
    }

    #[tokio::test]
    async fn test_readiness_fails_without_claims() {
        let app = create_router(ClaimCatalog::new(Vec::new()).unwrap(), ApiConfig::default());
        let (status, _) = get(&app, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}

// ============================================================================
// Stateless Query Tests
// ============================================================================

mod claims_query_tests {
    use super::*;

    #[tokio::test]
    async fn test_default_listing_newest_filing_first() {
        let (status, body) = get(&app(), "/api/v1/claims").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            ids(&body),
            vec![
                "FRA/OD/MYU/2024/002345",
                "FRA/MP/SEO/2024/001234",
                "FRA/MP/BTL/2024/001567",
                "FRA/MP/BTL/2024/001568",
                "FRA/TR/WTL/2024/000456",
            ]
        );
        assert_eq!(body["page"]["total_items"], 5);
        assert_eq!(body["sort"]["field"], "filing_date");
        assert_eq!(body["sort"]["direction"], "desc");
        assert_eq!(body["active_filters"], 0);
    }

    #[tokio::test]
    async fn test_quantities_are_json_numbers() {
        let (_, body) = get(&app(), "/api/v1/claims?sort=claim_id&direction=asc").await;
        let first = &body["claims"][0];

        assert_eq!(first["claim_id"], "FRA/MP/BTL/2024/001567");
        assert_eq!(first["area_acres"].as_f64(), Some(2.5));
        assert_eq!(first["confidence_percent"], 94);
        assert_eq!(first["quality"], "high");
        assert_eq!(first["claim_type"], "IFR");
    }

    #[tokio::test]
    async fn test_filter_by_status() {
        let (_, body) = get(&app(), "/api/v1/claims?status=APPROVED_BY_DLC").await;
        assert_eq!(ids(&body), vec!["FRA/MP/BTL/2024/001567"]);
        assert_eq!(body["active_filters"], 1);
    }

    #[tokio::test]
    async fn test_filter_by_area_and_sort_by_area() {
        let (_, body) = get(
            &app(),
            "/api/v1/claims?area_min=2&area_max=20&sort=area_acres&direction=asc",
        )
        .await;

        assert_eq!(
            ids(&body),
            vec![
                "FRA/MP/BTL/2024/001567",
                "FRA/OD/MYU/2024/002345",
                "FRA/MP/BTL/2024/001568",
            ]
        );
    }

    #[tokio::test]
    async fn test_filter_by_quality_and_filing_date() {
        let (_, body) = get(&app(), "/api/v1/claims?quality=medium&filed_from=2024-02-01").await;
        assert_eq!(ids(&body), vec!["FRA/MP/BTL/2024/001568"]);
    }

    #[tokio::test]
    async fn test_search_by_id_fragment() {
        let (_, body) = get(&app(), "/api/v1/claims?search=fra%2Ftr").await;
        assert_eq!(ids(&body), vec!["FRA/TR/WTL/2024/000456"]);
    }

    #[tokio::test]
    async fn test_pagination() {
        let (_, body) = get(&app(), "/api/v1/claims?page=2&page_size=2").await;

        assert_eq!(body["claims"].as_array().unwrap().len(), 2);
        assert_eq!(body["page"]["first_item"], 3);
        assert_eq!(body["page"]["last_item"], 4);
        assert_eq!(body["page"]["total_pages"], 3);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let (status, body) = get(&app(), "/api/v1/claims?page=9").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["claims"].as_array().unwrap().is_empty());
        assert_eq!(body["page"]["first_item"], 0);
    }

    #[tokio::test]
    async fn test_page_zero_is_rejected() {
        let (status, body) = get(&app(), "/api/v1/claims?page=0").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["details"][0], "page: range");
    }

    #[tokio::test]
    async fn test_long_search_is_rejected() {
        let uri = format!("/api/v1/claims?search={}", "a".repeat(201));
        let (status, _) = get(&app(), &uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_status_is_bad_request() {
        let (status, body) = get(&app(), "/api/v1/claims?status=ARCHIVED").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("ARCHIVED"));
    }
}

// ============================================================================
// Claim Detail and Summary Tests
// ============================================================================

mod claim_detail_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_claim_by_register_id() {
        let (status, body) = get(&app(), "/api/v1/claims/by-id/FRA/MP/SEO/2024/001234").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["claim_id"], "FRA/MP/SEO/2024/001234");
        assert_eq!(body["status"], "VERIFIED_BY_FRC");
        assert_eq!(body["processing_days"], 127);
        assert_eq!(body["coordinates"], json!([79.4567, 22.1234]));
        assert_eq!(body["documents"].as_array().unwrap().len(), 3);
        assert_eq!(body["timeline"].as_array().unwrap().len(), 2);
        assert_eq!(
            body["next_statuses"],
            json!(["PENDING_AT_SDLC", "APPROVED_BY_DLC", "REJECTED"])
        );
    }

    #[tokio::test]
    async fn test_unknown_claim_is_not_found() {
        let (status, body) = get(&app(), "/api/v1/claims/by-id/FRA/XX/YYY/2024/000000").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_catalog_summary() {
        let (status, body) = get(&app(), "/api/v1/claims/summary?as_of=2024-09-02").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 5);
        assert_eq!(body["showing"], 5);
        assert_eq!(body["pending_review"], 2);
        assert_eq!(body["rejection_rate_percent"], 20);
        assert_eq!(body["by_status"]["REJECTED"], 1);
        assert_eq!(body["total_area_acres"].as_f64(), Some(23.5));
    }
}

// ============================================================================
// Session Tests
// ============================================================================

mod session_tests {
    use super::*;

    async fn create(app: &Router, page_size: usize) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/sessions",
            Some(json!({ "page_size": page_size })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["session_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_and_get_session() {
        let app = app();
        let id = create(&app, 2).await;

        let (status, body) = get(&app, &format!("/api/v1/sessions/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"]["page"], 1);
        assert_eq!(body["page"]["total_pages"], 3);
        assert_eq!(body["total_claims"], 5);
        assert_eq!(body["page_selected"], false);
    }

    #[tokio::test]
    async fn test_session_workflow() {
        let app = app();
        let id = create(&app, 2).await;
        let base = format!("/api/v1/sessions/{id}");

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("{base}/filters"),
            Some(json!({ "area_min": 2, "area_max": 20 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"]["total_items"], 3);

        let (_, body) = send(
            &app,
            Method::POST,
            &format!("{base}/sort"),
            Some(json!({ "field": "area_acres", "direction": "asc" })),
        )
        .await;
        assert_eq!(ids(&body), vec!["FRA/MP/BTL/2024/001567", "FRA/OD/MYU/2024/002345"]);

        let (_, body) = send(&app, Method::POST, &format!("{base}/selection/page"), None).await;
        assert_eq!(body["added"], 2);

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("{base}/selection/toggle"),
            Some(json!({ "claim_id": "FRA/MP/BTL/2024/001568" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selected"], true);
        assert_eq!(body["selected_count"], 3);

        let (_, body) = send(
            &app,
            Method::PUT,
            &format!("{base}/filters"),
            Some(json!({ "status": "REJECTED" })),
        )
        .await;
        assert_eq!(body["selected"], json!(["FRA/OD/MYU/2024/002345"]));
        assert_eq!(body["page_selected"], true);

        let (_, body) = send(&app, Method::PUT, &format!("{base}/page"), Some(json!({ "page": 99 }))).await;
        assert_eq!(body["page"]["page"], 1);

        let (_, body) = send(&app, Method::DELETE, &format!("{base}/selection"), None).await;
        assert_eq!(body["selected"], json!([]));

        let (_, body) = send(&app, Method::DELETE, &format!("{base}/filters"), None).await;
        assert_eq!(body["page"]["total_items"], 5);
        assert_eq!(body["active_filters"], 0);
    }

    #[tokio::test]
    async fn test_sort_without_direction_toggles() {
        let app = app();
        let id = create(&app, 25).await;
        let uri = format!("/api/v1/sessions/{id}/sort");

        let (_, body) = send(&app, Method::POST, &uri, Some(json!({ "field": "area_acres" }))).await;
        assert_eq!(body["sort"]["direction"], "asc");

        let (_, body) = send(&app, Method::POST, &uri, Some(json!({ "field": "area_acres" }))).await;
        assert_eq!(body["sort"]["direction"], "desc");
        assert_eq!(body["claims"][0]["claim_id"], "FRA/MP/BTL/2024/001568");
    }

    #[tokio::test]
    async fn test_toggle_unknown_claim_is_not_found() {
        let app = app();
        let id = create(&app, 25).await;

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/selection/toggle"),
            Some(json!({ "claim_id": "NOPE" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_session_summary_counts_view() {
        let app = app();
        let id = create(&app, 25).await;
        let base = format!("/api/v1/sessions/{id}");

        send(&app, Method::PUT, &format!("{base}/filters"), Some(json!({ "state": "मध्य प्रदेश" }))).await;
        send(&app, Method::POST, &format!("{base}/selection/page"), None).await;

        let (status, body) = get(&app, &format!("{base}/summary?as_of=2024-09-02")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 5);
        assert_eq!(body["showing"], 3);
        assert_eq!(body["selected"], 3);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let app = app();
        let id = create(&app, 25).await;
        let uri = format!("/api/v1/sessions/{id}");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_session_limit() {
        let app = app_with(ApiConfig {
            max_sessions: 1,
            ..ApiConfig::default()
        });
        create(&app, 25).await;

        let (status, body) = send(&app, Method::POST, "/api/v1/sessions", Some(json!({}))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");
    }

    #[tokio::test]
    async fn test_invalid_page_request() {
        let app = app();
        let id = create(&app, 25).await;

        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/sessions/{id}/page"),
            Some(json!({ "page": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_session_id() {
        let (status, body) = get(&app(), "/api/v1/sessions/not-a-uuid").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_malformed_json_body() {
        let app = app();
        let id = create(&app, 25).await;
        let request = Request::builder()
            .method(Method::PUT)
            .uri(format!("/api/v1/sessions/{id}/filters"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"status\":"))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_mistyped_json_field() {
        let app = app();
        let id = create(&app, 25).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/sessions/{id}/page"),
            Some(json!({ "page": "second" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }
}
