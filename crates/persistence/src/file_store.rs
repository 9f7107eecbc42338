//! JSON-file backed job store.
//!
//! The authoritative collection lives in `<data_dir>/erp21-jobs.json`; the
//! industry list in `<data_dir>/erp21-industries.json`. When the jobs file
//! is missing or unreadable the store falls back to the bootstrap snapshot,
//! migrates legacy records, writes the migrated set back, and serves that.
//! Load never fails the process: the worst case is an empty collection.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use domain::models::job::{JobRecord, RawJobRecord};
use domain::store::{JobStore, StoreError};

use crate::DEFAULT_INDUSTRIES;

/// File names mirror the browser storage keys of the original deployment.
const JOBS_FILE: &str = "erp21-jobs.json";
const INDUSTRIES_FILE: &str = "erp21-industries.json";

pub struct FileStore {
    jobs_path: PathBuf,
    industries_path: PathBuf,
    bootstrap_path: Option<PathBuf>,
}

impl FileStore {
    pub fn new(data_dir: impl AsRef<Path>, bootstrap_path: Option<PathBuf>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            jobs_path: data_dir.join(JOBS_FILE),
            industries_path: data_dir.join(INDUSTRIES_FILE),
            bootstrap_path,
        }
    }

    /// Reads and migrates the bootstrap snapshot. Records that fail the
    /// required-field check are skipped with a warning, never coerced.
    async fn load_bootstrap(&self) -> Vec<JobRecord> {
        let Some(path) = &self.bootstrap_path else {
            return Vec::new();
        };

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), %err, "Bootstrap snapshot unavailable, starting empty");
                return Vec::new();
            }
        };

        let raw: Vec<RawJobRecord> = match serde_json::from_slice(&bytes) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), %err, "Bootstrap snapshot unparsable, starting empty");
                return Vec::new();
            }
        };

        let loaded_at = Utc::now();
        raw.into_iter()
            .filter_map(|record| match record.normalize(loaded_at) {
                Ok(job) => Some(job),
                Err(err) => {
                    warn!(%err, "Skipping invalid bootstrap record");
                    None
                }
            })
            .collect()
    }

    async fn write_json(&self, path: &Path, value: &impl serde::Serialize) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        }
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl JobStore for FileStore {
    async fn load_jobs(&self) -> Result<Vec<JobRecord>, StoreError> {
        match tokio::fs::read(&self.jobs_path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<JobRecord>>(&bytes) {
                Ok(jobs) => return Ok(jobs),
                Err(err) => {
                    warn!(path = %self.jobs_path.display(), %err,
                        "Persisted collection unparsable, falling back to bootstrap");
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.jobs_path.display(), "No persisted collection yet");
            }
            Err(err) => {
                warn!(path = %self.jobs_path.display(), %err,
                    "Persisted collection unreadable, falling back to bootstrap");
            }
        }

        let jobs = self.load_bootstrap().await;
        // Persist the migrated snapshot so the next load skips migration.
        // A failed write-back still serves the collection; load never fails.
        if let Err(err) = self.save_jobs(&jobs).await {
            warn!(path = %self.jobs_path.display(), %err,
                "Could not persist migrated snapshot, serving it unpersisted");
        }
        Ok(jobs)
    }

    async fn save_jobs(&self, jobs: &[JobRecord]) -> Result<(), StoreError> {
        self.write_json(&self.jobs_path, &jobs).await
    }

    async fn load_industries(&self) -> Result<Vec<String>, StoreError> {
        match tokio::fs::read(&self.industries_path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<String>>(&bytes) {
                Ok(labels) => return Ok(labels),
                Err(err) => {
                    warn!(path = %self.industries_path.display(), %err,
                        "Industry list unparsable, reseeding defaults");
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No persisted industry list yet, seeding defaults");
            }
            Err(err) => {
                warn!(path = %self.industries_path.display(), %err,
                    "Industry list unreadable, reseeding defaults");
            }
        }

        let labels: Vec<String> = DEFAULT_INDUSTRIES.iter().map(|s| s.to_string()).collect();
        if let Err(err) = self.save_industries(&labels).await {
            warn!(path = %self.industries_path.display(), %err,
                "Could not persist seeded industry list, serving it unpersisted");
        }
        Ok(labels)
    }

    async fn save_industries(&self, labels: &[String]) -> Result<(), StoreError> {
        self.write_json(&self.industries_path, &labels).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir, bootstrap: Option<&str>) -> FileStore {
        let bootstrap_path = bootstrap.map(|contents| {
            let path = dir.path().join("jobs-bootstrap.json");
            std::fs::write(&path, contents).unwrap();
            path
        });
        FileStore::new(dir.path().join("data"), bootstrap_path)
    }

    fn job(id: &str) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            title: "SAP Consultant".to_string(),
            location: "Singapore".to_string(),
            industry: "Oil & Gas".to_string(),
            description: "ERP rollout".to_string(),
            requirements: vec!["SAP FICO".to_string()],
            date_posted: "2025-01-05".to_string(),
            archived: false,
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, None);

        let jobs = vec![job("1"), job("2")];
        store.save_jobs(&jobs).await.unwrap();
        assert_eq!(store.load_jobs().await.unwrap(), jobs);
    }

    #[tokio::test]
    async fn test_round_trip_is_stable() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, None);

        store.save_jobs(&[job("1")]).await.unwrap();
        let first = std::fs::read(dir.path().join("data").join(JOBS_FILE)).unwrap();
        let loaded = store.load_jobs().await.unwrap();
        store.save_jobs(&loaded).await.unwrap();
        let second = std::fs::read(dir.path().join("data").join(JOBS_FILE)).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_bootstrap_and_migrates() {
        let dir = TempDir::new().unwrap();
        // Legacy record: no archived, no datePosted.
        let bootstrap = r#"[{"id":"1","title":"SAP Consultant","location":"Singapore",
            "industry":"Oil & Gas","description":"ERP rollout","requirements":["SAP FICO"]}]"#;
        let store = store(&dir, Some(bootstrap));

        let jobs = store.load_jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert!(!jobs[0].archived);
        assert_eq!(jobs[0].date_posted, shared::dates::to_iso_date(Utc::now()));

        // The migrated set was written back.
        let persisted = std::fs::read(dir.path().join("data").join(JOBS_FILE)).unwrap();
        let persisted: Vec<JobRecord> = serde_json::from_slice(&persisted).unwrap();
        assert_eq!(persisted, jobs);
    }

    #[tokio::test]
    async fn test_bootstrap_skips_invalid_records() {
        let dir = TempDir::new().unwrap();
        let bootstrap = r#"[
            {"id":"1","title":"Kept","location":"Singapore","industry":"Utility","description":"ok"},
            {"id":"2","title":"","location":"Singapore","industry":"Utility","description":"no title"}
        ]"#;
        let store = store(&dir, Some(bootstrap));

        let jobs = store.load_jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Kept");
    }

    #[tokio::test]
    async fn test_no_bootstrap_yields_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, None);
        assert!(store.load_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_jobs_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, None);
        let data_dir = dir.path().join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(data_dir.join(JOBS_FILE), b"{not json").unwrap();

        assert!(store.load_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_survives_unwritable_data_dir() {
        let dir = TempDir::new().unwrap();
        let bootstrap = r#"[{"id":"1","title":"SAP Consultant","location":"Singapore",
            "industry":"Oil & Gas","description":"ERP rollout","requirements":["SAP FICO"]}]"#;
        let store = store(&dir, Some(bootstrap));
        // A regular file where the data directory should be makes every
        // write fail, regardless of permissions.
        std::fs::write(dir.path().join("data"), b"occupied").unwrap();

        let jobs = store.load_jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, "1");

        let labels = store.load_industries().await.unwrap();
        assert_eq!(labels.len(), DEFAULT_INDUSTRIES.len());

        // Explicit saves still surface the failure to callers.
        assert!(store.save_jobs(&jobs).await.is_err());
    }

    #[tokio::test]
    async fn test_industries_seed_defaults_and_persist() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, None);

        let labels = store.load_industries().await.unwrap();
        assert_eq!(labels.len(), DEFAULT_INDUSTRIES.len());
        assert_eq!(labels[0], "Oil & Gas");

        store
            .save_industries(&["Aerospace".to_string()])
            .await
            .unwrap();
        assert_eq!(store.load_industries().await.unwrap(), vec!["Aerospace"]);
    }
}
