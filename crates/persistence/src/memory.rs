//! In-memory job store for tests.

use std::sync::RwLock;

use async_trait::async_trait;

use domain::models::job::JobRecord;
use domain::store::{JobStore, StoreError};

use crate::DEFAULT_INDUSTRIES;

/// Fake store holding everything in process memory. Starts with the default
/// industry labels and an empty job collection unless seeded.
pub struct MemoryStore {
    jobs: RwLock<Vec<JobRecord>>,
    industries: RwLock<Vec<String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
            industries: RwLock::new(DEFAULT_INDUSTRIES.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(jobs: Vec<JobRecord>, industries: Vec<String>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
            industries: RwLock::new(industries),
        }
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn load_jobs(&self) -> Result<Vec<JobRecord>, StoreError> {
        Ok(self.jobs.read().unwrap().clone())
    }

    async fn save_jobs(&self, jobs: &[JobRecord]) -> Result<(), StoreError> {
        *self.jobs.write().unwrap() = jobs.to_vec();
        Ok(())
    }

    async fn load_industries(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.industries.read().unwrap().clone())
    }

    async fn save_industries(&self, labels: &[String]) -> Result<(), StoreError> {
        *self.industries.write().unwrap() = labels.to_vec();
        Ok(())
    }
}
