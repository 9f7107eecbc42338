//! Industry taxonomy endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use domain::models::IndustryUsage;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::jobs::ConfirmQuery;

#[derive(Debug, Deserialize)]
pub struct AddIndustryRequest {
    #[serde(default)]
    pub label: String,
}

/// GET /api/admin/industries
///
/// Labels with usage counts so the portal can grey out the delete button.
pub async fn list_industries(
    State(state): State<AppState>,
) -> Result<Json<Vec<IndustryUsage>>, ApiError> {
    Ok(Json(state.taxonomy.list_with_usage().await?))
}

/// POST /api/admin/industries
///
/// Blank or duplicate labels are a quiet no-op; the response is always the
/// resulting list.
pub async fn add_industry(
    State(state): State<AppState>,
    Json(req): Json<AddIndustryRequest>,
) -> Result<(StatusCode, Json<Vec<String>>), ApiError> {
    let labels = state.taxonomy.add(&req.label).await?;
    Ok((StatusCode::OK, Json(labels)))
}

/// DELETE /api/admin/industries/:label?confirm=true
pub async fn remove_industry(
    State(state): State<AppState>,
    Path(label): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    if !query.confirm {
        return Err(ApiError::ConfirmationRequired(
            "Removing an industry is permanent. Pass confirm=true to proceed.".to_string(),
        ));
    }

    let labels = state.taxonomy.remove(&label).await?;
    info!(%label, "Industry removed");
    Ok(Json(labels))
}
