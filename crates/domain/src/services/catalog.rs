//! Public catalog projection.
//!
//! Read-only view of the job collection for the public jobs page: archived
//! records are always excluded, then the industry and location filters
//! apply. Stored order is preserved; there is no pagination.

use crate::models::job::JobRecord;

/// Sentinel filter value that bypasses filtering.
pub const ALL: &str = "All";

/// Filters the collection for public listing. Industry matches exactly;
/// location is a case-insensitive substring match.
pub fn list_public(jobs: &[JobRecord], industry: &str, location: &str) -> Vec<JobRecord> {
    jobs.iter()
        .filter(|job| !job.archived)
        .filter(|job| industry == ALL || job.industry == industry)
        .filter(|job| {
            location == ALL
                || job
                    .location
                    .to_lowercase()
                    .contains(&location.to_lowercase())
        })
        .cloned()
        .collect()
}
