//! Job posting models.
//!
//! `JobRecord` is the persisted shape (camelCase JSON, matching the
//! `erp21-jobs` storage key). `RawJobRecord` is the lenient shape accepted
//! from legacy snapshots; `normalize` turns it into a strict record or
//! rejects it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use shared::dates::to_iso_date;
use shared::validation::validate_non_blank;

/// A job posting as persisted and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Opaque unique id, time-based, never reused. Immutable once assigned.
    pub id: String,
    pub title: String,
    pub location: String,
    /// Plain string copy of a taxonomy label, not a reference. Taxonomy
    /// edits never rewrite this value on existing records.
    pub industry: String,
    pub description: String,
    /// Never contains blank entries after a save.
    pub requirements: Vec<String>,
    /// ISO calendar date (`YYYY-MM-DD`). Legacy values may not parse.
    pub date_posted: String,
    pub archived: bool,
}

/// Admin-submitted draft for creating or updating a job posting.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    #[validate(custom(function = "validate_non_blank"))]
    pub title: String,

    #[validate(custom(function = "validate_non_blank"))]
    pub location: String,

    #[validate(custom(function = "validate_non_blank"))]
    pub industry: String,

    #[validate(custom(function = "validate_non_blank"))]
    pub description: String,

    #[serde(default)]
    pub requirements: Vec<String>,

    /// Optional posting date override. When absent, creation defaults to
    /// today and updates keep the existing date.
    #[serde(default)]
    pub date_posted: Option<String>,
}

/// Lenient record shape parsed from legacy snapshots, before default-fill
/// and required-field checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJobRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub date_posted: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
}

/// Why a raw record was rejected during normalization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Record is missing required field `{0}`")]
    MissingField(&'static str),
}

impl RawJobRecord {
    /// Normalizes a legacy record: backfills `archived` (false) and
    /// `datePosted` (the load date), strips blank requirements, and rejects
    /// records missing any required field instead of coercing them.
    pub fn normalize(self, loaded_at: DateTime<Utc>) -> Result<JobRecord, NormalizeError> {
        fn required(
            value: Option<String>,
            field: &'static str,
        ) -> Result<String, NormalizeError> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(NormalizeError::MissingField(field)),
            }
        }

        Ok(JobRecord {
            id: required(self.id, "id")?,
            title: required(self.title, "title")?,
            location: required(self.location, "location")?,
            industry: required(self.industry, "industry")?,
            description: required(self.description, "description")?,
            requirements: shared::validation::strip_blank_requirements(&self.requirements),
            date_posted: self
                .date_posted
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| to_iso_date(loaded_at)),
            archived: self.archived.unwrap_or(false),
        })
    }
}

/// Generates a fresh job id: millisecond timestamp plus a random suffix so
/// two postings created in the same millisecond stay distinct.
pub fn new_job_id(now: DateTime<Utc>) -> String {
    format!("{}-{:04x}", now.timestamp_millis(), rand::random::<u16>())
}
