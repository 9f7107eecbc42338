//! Common test utilities for integration tests.
//!
//! All integration tests run against an in-memory job store, so there is
//! nothing external to provision or clean up.

// Allow dead code in this module - these are helper utilities that may not be
// used by all integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};

use domain::models::JobRecord;
use erp21_careers_api::app::{create_app, AppState};
use erp21_careers_api::config::{
    CatalogConfig, Config, LoggingConfig, RateLimitConfig, SecurityConfig, ServerConfig,
    SessionConfig, StorageConfig,
};
use persistence::MemoryStore;

/// Password the test config accepts.
pub const TEST_PASSWORD: &str = "test-password";

/// Cookie header value carrying a valid admin session.
pub const ADMIN_COOKIE: &str = "erp21_admin=1";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use random port
            request_timeout_secs: 30,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            admin_password: TEST_PASSWORD.to_string(),
            cors_origins: vec![],
            secure_cookies: false,
        },
        session: SessionConfig {
            cookie_name: "erp21_admin".to_string(),
            max_age_secs: 43200,
        },
        rate_limit: RateLimitConfig {
            window_secs: 900,
            max_attempts: 5,
        },
        storage: StorageConfig {
            data_dir: "data".to_string(),
            bootstrap_file: String::new(),
        },
        catalog: CatalogConfig {
            stale_after_days: 14,
            sweep_enabled: false,
        },
    }
}

/// Build a test app over an in-memory store seeded with the given data.
pub fn test_app_with(jobs: Vec<JobRecord>, industries: Vec<String>) -> Router {
    let store = Arc::new(MemoryStore::seeded(jobs, industries));
    let state = AppState::new(Arc::new(test_config()), store);
    create_app(state)
}

/// Build a test app over an empty in-memory store with default industries.
pub fn test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(Arc::new(test_config()), store);
    create_app(state)
}

/// A realistic posting for seeding.
pub fn sample_job(id: &str, industry: &str, location: &str, archived: bool) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        title: format!("Posting {id}"),
        location: location.to_string(),
        industry: industry.to_string(),
        description: "Integration fixture".to_string(),
        requirements: vec!["A requirement".to_string()],
        date_posted: "2025-01-10".to_string(),
        archived,
    }
}

/// Build a GET request, optionally with the admin session cookie.
pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Build a JSON request, optionally with the admin session cookie.
pub fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a bodyless request (DELETE/POST), optionally with the cookie.
pub fn empty_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Helper to parse a JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// Helper to read a response body as text.
pub async fn read_response_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&body).to_string()
}
