//! Admin job lifecycle endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use domain::models::{JobDraft, JobRecord};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_jobs_swept;

/// Destructive operations require an explicit confirm flag, mirroring the
/// confirmation dialog the portal shows before issuing them.
#[derive(Debug, Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub archived: usize,
    pub threshold_days: u32,
}

/// GET /api/admin/jobs
///
/// Full collection, archived postings included.
pub async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobRecord>>, ApiError> {
    Ok(Json(state.lifecycle.list().await?))
}

/// POST /api/admin/jobs
pub async fn create_job(
    State(state): State<AppState>,
    Json(draft): Json<JobDraft>,
) -> Result<(StatusCode, Json<JobRecord>), ApiError> {
    let job = state.lifecycle.create(draft).await?;
    info!(job_id = %job.id, title = %job.title, "Job created");
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/admin/jobs/:id
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<JobDraft>,
) -> Result<Json<JobRecord>, ApiError> {
    let job = state.lifecycle.update(&id, draft).await?;
    info!(job_id = %job.id, "Job updated");
    Ok(Json(job))
}

/// POST /api/admin/jobs/:id/archive
///
/// Flips the archived flag, both directions.
pub async fn toggle_archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobRecord>, ApiError> {
    let job = state.lifecycle.toggle_archive(&id).await?;
    info!(job_id = %job.id, archived = job.archived, "Job archive toggled");
    Ok(Json(job))
}

/// DELETE /api/admin/jobs/:id?confirm=true
///
/// Only archived postings can be deleted, and only with the confirm flag.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<JobRecord>, ApiError> {
    if !query.confirm {
        return Err(ApiError::ConfirmationRequired(
            "Deleting a job is permanent. Pass confirm=true to proceed.".to_string(),
        ));
    }

    let job = state.lifecycle.get(&id).await?;
    if !job.archived {
        return Err(ApiError::Validation(
            "Only archived jobs can be deleted".to_string(),
        ));
    }

    let removed = state.lifecycle.delete(&id).await?;
    info!(job_id = %removed.id, "Job deleted");
    Ok(Json(removed))
}

/// POST /api/admin/jobs/sweep
///
/// Archives every active posting older than the configured threshold.
pub async fn sweep_jobs(State(state): State<AppState>) -> Result<Json<SweepResponse>, ApiError> {
    let threshold_days = state.config.catalog.stale_after_days;
    let archived = state
        .lifecycle
        .sweep_stale(threshold_days, Utc::now())
        .await?;

    if archived > 0 {
        record_jobs_swept(archived);
        info!(archived, threshold_days, "Manual stale sweep archived postings");
    }

    Ok(Json(SweepResponse {
        archived,
        threshold_days,
    }))
}
