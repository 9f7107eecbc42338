//! Spreadsheet export endpoint.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use domain::services::export::{ExportDocument, ExportFormat};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_export;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// GET /api/admin/export?format=csv|json
///
/// Downloads the full collection plus the industry sheet. Defaults to CSV.
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let format = match query.format.as_deref() {
        None => ExportFormat::default(),
        Some(value) => ExportFormat::parse(value).ok_or_else(|| {
            ApiError::Validation(format!("Unsupported export format: {}", value))
        })?,
    };

    let jobs = state.store.load_jobs().await?;
    let labels = state.store.load_industries().await?;
    let document = ExportDocument::build(&jobs, &labels);

    let body = match format {
        ExportFormat::Csv => document.to_csv(),
        ExportFormat::Json => serde_json::to_string_pretty(&document)
            .map_err(|e| ApiError::Internal(e.to_string()))?,
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(format.content_type()),
    );
    let disposition = format!("attachment; filename=\"{}\"", format.file_name());
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    record_export(match format {
        ExportFormat::Csv => "csv",
        ExportFormat::Json => "json",
    });
    info!(jobs = jobs.len(), industries = labels.len(), "Catalog exported");

    Ok((StatusCode::OK, headers, body).into_response())
}
