//! Industry taxonomy service.
//!
//! The label list is ordered (insertion order preserved for display) and
//! case-sensitive. Removal is blocked while any job, archived or not, still
//! references the label.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::industry::{usage_count, IndustryUsage};
use crate::store::{JobStore, StoreError};

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Industry \"{label}\" is still used by {count} job(s)")]
    InUse { label: String, count: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct TaxonomyService {
    store: Arc<dyn JobStore>,
    write_lock: Mutex<()>,
}

impl TaxonomyService {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Lists labels in stored order with their usage counts.
    pub async fn list_with_usage(&self) -> Result<Vec<IndustryUsage>, TaxonomyError> {
        let labels = self.store.load_industries().await?;
        let jobs = self.store.load_jobs().await?;
        Ok(labels
            .into_iter()
            .map(|label| {
                let count = usage_count(&jobs, &label);
                IndustryUsage {
                    removable: count == 0,
                    usage_count: count,
                    label,
                }
            })
            .collect())
    }

    /// Appends a label. Blank input and exact duplicates are silent no-ops.
    /// Returns the resulting label list.
    pub async fn add(&self, label: &str) -> Result<Vec<String>, TaxonomyError> {
        let label = label.trim();

        let _guard = self.write_lock.lock().await;
        let mut labels = self.store.load_industries().await?;
        if label.is_empty() || labels.iter().any(|l| l == label) {
            return Ok(labels);
        }

        labels.push(label.to_string());
        self.store.save_industries(&labels).await?;
        info!(%label, "Industry added");
        Ok(labels)
    }

    /// Removes a label, failing with the blocking count while any job still
    /// references it. Removing an unknown label is a no-op. Returns the
    /// resulting label list.
    pub async fn remove(&self, label: &str) -> Result<Vec<String>, TaxonomyError> {
        let _guard = self.write_lock.lock().await;
        let mut labels = self.store.load_industries().await?;

        let jobs = self.store.load_jobs().await?;
        let count = usage_count(&jobs, label);
        if count > 0 {
            return Err(TaxonomyError::InUse {
                label: label.to_string(),
                count,
            });
        }

        let before = labels.len();
        labels.retain(|l| l != label);
        if labels.len() != before {
            self.store.save_industries(&labels).await?;
            info!(%label, "Industry removed");
        }
        Ok(labels)
    }
}
