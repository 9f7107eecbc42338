//! Admin session gate.
//!
//! Every route under /api/admin (except login/logout/me) runs behind this
//! middleware. The check is the cookie marker only; there is no token to
//! verify and no user identity to resolve.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;

pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.cookies.is_authenticated(req.headers()) {
        return ApiError::Unauthorized("Admin session required".to_string()).into_response();
    }

    next.run(req).await
}
