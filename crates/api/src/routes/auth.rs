//! Admin session endpoints: login, logout, whoami.
//!
//! Response bodies here are fixed shapes the admin portal matches on, so
//! they bypass the shared error envelope.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::services::session::{client_addr, AuthError};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub authenticated: bool,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Response {
    let client = client_addr(&headers);

    match state.session.login(&req.password, &client) {
        Ok(()) => {
            let mut response_headers = HeaderMap::new();
            state.cookies.add_session_cookie(&mut response_headers);
            (
                StatusCode::OK,
                response_headers,
                Json(LoginResponse {
                    ok: true,
                    error: None,
                }),
            )
                .into_response()
        }
        Err(AuthError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                ok: false,
                error: Some("Invalid password".to_string()),
            }),
        )
            .into_response(),
        Err(AuthError::RateLimited(retry_after)) => {
            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(LoginResponse {
                    ok: false,
                    error: Some(format!("Too many attempts. Try again in {}s.", retry_after)),
                }),
            )
                .into_response();
            if let Ok(value) = header::HeaderValue::from_str(&retry_after.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            response
        }
        Err(AuthError::SecretUnconfigured) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(LoginResponse {
                ok: false,
                error: Some("Admin password not configured".to_string()),
            }),
        )
            .into_response(),
    }
}

/// POST /api/admin/logout
///
/// Always succeeds, session or not.
pub async fn logout(State(state): State<AppState>) -> Response {
    let mut response_headers = HeaderMap::new();
    state.cookies.add_clear_cookie(&mut response_headers);
    (
        StatusCode::OK,
        response_headers,
        Json(LoginResponse {
            ok: true,
            error: None,
        }),
    )
        .into_response()
}

/// GET /api/admin/me
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Json<MeResponse> {
    Json(MeResponse {
        authenticated: state.cookies.is_authenticated(&headers),
    })
}
