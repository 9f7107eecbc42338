//! Job lifecycle engine.
//!
//! Every operation is a full load-mutate-save cycle over the whole
//! collection, serialized by an internal mutex so concurrent admin requests
//! within one process cannot interleave their writes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;
use validator::Validate;

use shared::dates::{is_stale, to_iso_date};
use shared::validation::strip_blank_requirements;

use crate::models::job::{new_job_id, JobDraft, JobRecord};
use crate::store::{JobStore, StoreError};

/// Errors surfaced by lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Job not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Create/update/archive/delete/sweep operations over the job collection.
pub struct LifecycleEngine {
    store: Arc<dyn JobStore>,
    write_lock: Mutex<()>,
}

impl LifecycleEngine {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the full collection, archived records included.
    pub async fn list(&self) -> Result<Vec<JobRecord>, LifecycleError> {
        Ok(self.store.load_jobs().await?)
    }

    /// Returns a single record by id.
    pub async fn get(&self, id: &str) -> Result<JobRecord, LifecycleError> {
        let jobs = self.store.load_jobs().await?;
        jobs.into_iter()
            .find(|j| j.id == id)
            .ok_or_else(|| LifecycleError::NotFound(id.to_string()))
    }

    /// Creates a new posting from a draft. The industry must already exist
    /// in the taxonomy. Assigns a fresh time-based id, strips blank
    /// requirement lines, defaults `datePosted` to today and `archived`
    /// to false.
    pub async fn create(&self, draft: JobDraft) -> Result<JobRecord, LifecycleError> {
        validate_draft(&draft)?;

        let _guard = self.write_lock.lock().await;
        self.ensure_known_industry(&draft.industry).await?;
        let mut jobs = self.store.load_jobs().await?;

        let now = Utc::now();
        let record = JobRecord {
            id: new_job_id(now),
            title: draft.title,
            location: draft.location,
            industry: draft.industry,
            description: draft.description,
            requirements: strip_blank_requirements(&draft.requirements),
            date_posted: posted_date_or(draft.date_posted, || to_iso_date(now)),
            archived: false,
        };

        jobs.push(record.clone());
        self.store.save_jobs(&jobs).await?;
        info!(job_id = %record.id, title = %record.title, "Job created");
        Ok(record)
    }

    /// Updates an existing posting. The id and the `archived` flag are
    /// preserved; the posting date is kept unless the draft overrides it.
    /// The draft's industry must exist in the taxonomy, same as `create`.
    pub async fn update(&self, id: &str, draft: JobDraft) -> Result<JobRecord, LifecycleError> {
        validate_draft(&draft)?;

        let _guard = self.write_lock.lock().await;
        self.ensure_known_industry(&draft.industry).await?;
        let mut jobs = self.store.load_jobs().await?;

        let job = jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| LifecycleError::NotFound(id.to_string()))?;

        job.title = draft.title;
        job.location = draft.location;
        job.industry = draft.industry;
        job.description = draft.description;
        job.requirements = strip_blank_requirements(&draft.requirements);
        if let Some(date) = draft.date_posted.filter(|d| !d.trim().is_empty()) {
            job.date_posted = date;
        }
        let updated = job.clone();

        self.store.save_jobs(&jobs).await?;
        info!(job_id = %id, "Job updated");
        Ok(updated)
    }

    /// Flips the archived flag in place. No validation.
    pub async fn toggle_archive(&self, id: &str) -> Result<JobRecord, LifecycleError> {
        let _guard = self.write_lock.lock().await;
        let mut jobs = self.store.load_jobs().await?;

        let job = jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| LifecycleError::NotFound(id.to_string()))?;
        job.archived = !job.archived;
        let updated = job.clone();

        self.store.save_jobs(&jobs).await?;
        info!(job_id = %id, archived = updated.archived, "Archive flag toggled");
        Ok(updated)
    }

    /// Removes a record unconditionally and returns it. Callers enforce the
    /// archived-only policy and the confirmation step.
    pub async fn delete(&self, id: &str) -> Result<JobRecord, LifecycleError> {
        let _guard = self.write_lock.lock().await;
        let mut jobs = self.store.load_jobs().await?;

        let index = jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| LifecycleError::NotFound(id.to_string()))?;
        let removed = jobs.remove(index);

        self.store.save_jobs(&jobs).await?;
        info!(job_id = %id, "Job deleted");
        Ok(removed)
    }

    /// Archives every non-archived record older than the threshold by
    /// wall-clock age. Idempotent; returns the number of records archived
    /// in this run.
    pub async fn sweep_stale(
        &self,
        threshold_days: u32,
        now: DateTime<Utc>,
    ) -> Result<usize, LifecycleError> {
        let _guard = self.write_lock.lock().await;
        let mut jobs = self.store.load_jobs().await?;

        let mut archived = 0;
        for job in jobs.iter_mut() {
            if !job.archived && is_stale(&job.date_posted, now, threshold_days) {
                job.archived = true;
                archived += 1;
            }
        }

        self.store.save_jobs(&jobs).await?;
        if archived > 0 {
            info!(archived, threshold_days, "Stale postings archived");
        }
        Ok(archived)
    }

    /// Postings may only reference labels currently in the taxonomy, so a
    /// typo in the admin portal cannot create a posting no filter selects.
    async fn ensure_known_industry(&self, label: &str) -> Result<(), LifecycleError> {
        let labels = self.store.load_industries().await?;
        if labels.iter().any(|l| l == label) {
            Ok(())
        } else {
            Err(LifecycleError::Validation(format!(
                "Unknown industry: {label}"
            )))
        }
    }
}

fn validate_draft(draft: &JobDraft) -> Result<(), LifecycleError> {
    draft.validate().map_err(|errors| {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();
        LifecycleError::Validation(format!("Missing required field(s): {}", fields.join(", ")))
    })
}

fn posted_date_or(date: Option<String>, default: impl FnOnce() -> String) -> String {
    date.filter(|d| !d.trim().is_empty()).unwrap_or_else(default)
}
