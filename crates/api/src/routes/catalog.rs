//! Public job catalog endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use domain::models::JobRecord;
use domain::services::catalog::{self, ALL};

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    #[serde(default = "default_filter")]
    pub industry: String,

    #[serde(default = "default_filter")]
    pub location: String,
}

fn default_filter() -> String {
    ALL.to_string()
}

/// GET /api/jobs
///
/// Active postings only, filtered by exact industry and location substring.
pub async fn list_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<JobRecord>>, ApiError> {
    let jobs = state.store.load_jobs().await?;
    Ok(Json(catalog::list_public(
        &jobs,
        &query.industry,
        &query.location,
    )))
}
