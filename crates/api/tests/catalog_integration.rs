//! Integration tests for the public catalog and the export download.

mod common;

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use common::{
    get_request, parse_response_body, read_response_text, sample_job, test_app_with, ADMIN_COOKIE,
};

fn seeded_app() -> axum::Router {
    test_app_with(
        vec![
            sample_job("j1", "Oil & Gas", "Singapore", false),
            sample_job("j2", "Healthcare", "Singapore / Malaysia", false),
            sample_job("j3", "Oil & Gas", "Remote", true),
            sample_job("j4", "Shipping", "Malaysia", false),
        ],
        vec![
            "Oil & Gas".to_string(),
            "Healthcare".to_string(),
            "Shipping".to_string(),
        ],
    )
}

#[tokio::test]
async fn test_catalog_is_public_and_hides_archived() {
    let app = seeded_app();

    let response = app.oneshot(get_request("/api/jobs", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["j1", "j2", "j4"]);
}

#[tokio::test]
async fn test_catalog_industry_filter_is_exact() {
    let app = seeded_app();

    let response = app
        .oneshot(get_request("/api/jobs?industry=Oil%20%26%20Gas", None))
        .await
        .unwrap();

    let body = parse_response_body(response).await;
    let entries = body.as_array().unwrap();
    // j3 matches the industry but is archived.
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "j1");
}

#[tokio::test]
async fn test_catalog_location_filter_is_substring() {
    let app = seeded_app();

    let response = app
        .oneshot(get_request("/api/jobs?location=malaysia", None))
        .await
        .unwrap();

    let body = parse_response_body(response).await;
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["j2", "j4"]);
}

#[tokio::test]
async fn test_catalog_all_sentinel_bypasses_filters() {
    let app = seeded_app();

    let response = app
        .oneshot(get_request("/api/jobs?industry=All&location=All", None))
        .await
        .unwrap();

    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_export_defaults_to_csv_attachment() {
    let app = seeded_app();

    let response = app
        .oneshot(get_request("/api/admin/export", Some(ADMIN_COOKIE)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"erp21-jobs-export.csv\""
    );

    let text = read_response_text(response).await;
    assert!(text.starts_with('\u{FEFF}'));
    assert!(text.contains("Jobs\nID,Title,"));
    assert!(text.contains("Industries\nLabel,Jobs Using,Removable"));
    // Archived postings are included in exports.
    assert!(text.contains("j3"));
}

#[tokio::test]
async fn test_export_as_json_document() {
    let app = seeded_app();

    let response = app
        .oneshot(get_request(
            "/api/admin/export?format=json",
            Some(ADMIN_COOKIE),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = parse_response_body(response).await;
    assert_eq!(body["jobs"].as_array().unwrap().len(), 4);
    assert_eq!(body["industries"].as_array().unwrap().len(), 3);
    // Requirements are flattened into a single cell value.
    assert_eq!(body["jobs"][0]["requirements"], "A requirement");
}

#[tokio::test]
async fn test_export_rejects_unknown_format() {
    let app = seeded_app();

    let response = app
        .oneshot(get_request(
            "/api/admin/export?format=xlsx",
            Some(ADMIN_COOKIE),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_export_requires_session() {
    let app = seeded_app();

    let response = app
        .oneshot(get_request("/api/admin/export", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
