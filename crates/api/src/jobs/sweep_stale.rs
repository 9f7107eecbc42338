//! Background job that archives stale postings.
//!
//! Same operation as the manual sweep endpoint, run once a day so postings
//! age out even when nobody opens the admin portal.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use domain::services::LifecycleEngine;

use super::scheduler::{Job, JobFrequency};
use crate::middleware::metrics::record_jobs_swept;

pub struct SweepStalePostingsJob {
    lifecycle: Arc<LifecycleEngine>,
    threshold_days: u32,
}

impl SweepStalePostingsJob {
    pub fn new(lifecycle: Arc<LifecycleEngine>, threshold_days: u32) -> Self {
        Self {
            lifecycle,
            threshold_days,
        }
    }
}

#[async_trait::async_trait]
impl Job for SweepStalePostingsJob {
    fn name(&self) -> &'static str {
        "sweep_stale_postings"
    }

    fn frequency(&self) -> JobFrequency {
        JobFrequency::Daily
    }

    async fn execute(&self) -> Result<(), String> {
        let archived = self
            .lifecycle
            .sweep_stale(self.threshold_days, Utc::now())
            .await
            .map_err(|e| e.to_string())?;

        if archived > 0 {
            record_jobs_swept(archived);
            info!(
                archived,
                threshold_days = self.threshold_days,
                "Scheduled stale sweep archived postings"
            );
        }

        Ok(())
    }
}
