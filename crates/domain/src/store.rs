//! Repository abstraction over the persisted job collection.
//!
//! Every mutation is a full read-modify-write of the whole collection;
//! `save_*` unconditionally overwrites what is stored. There is no conflict
//! detection: last writer wins, which is accepted for a single-admin tool.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::job::JobRecord;

/// Errors surfaced by a job store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize collection: {0}")]
    Serialization(String),
}

/// Authoritative storage for job records and the industry label list.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Loads the full job collection, falling back to the bootstrap
    /// snapshot when nothing has been persisted yet.
    async fn load_jobs(&self) -> Result<Vec<JobRecord>, StoreError>;

    /// Overwrites the persisted job collection. Idempotent.
    async fn save_jobs(&self, jobs: &[JobRecord]) -> Result<(), StoreError>;

    /// Loads the ordered industry label list, seeding defaults on first use.
    async fn load_industries(&self) -> Result<Vec<String>, StoreError>;

    /// Overwrites the persisted industry label list. Idempotent.
    async fn save_industries(&self, labels: &[String]) -> Result<(), StoreError>;
}
