//! Industry taxonomy views.

use serde::Serialize;

use crate::models::job::JobRecord;

/// An industry label together with how many jobs currently reference it.
/// A label is removable only while its usage count is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryUsage {
    pub label: String,
    pub usage_count: usize,
    pub removable: bool,
}

/// Counts jobs referencing `label` (case-sensitive exact match, archived
/// records included).
pub fn usage_count(jobs: &[JobRecord], label: &str) -> usize {
    jobs.iter().filter(|j| j.industry == label).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(industry: &str, archived: bool) -> JobRecord {
        JobRecord {
            id: "1".to_string(),
            title: "Nurse".to_string(),
            location: "Singapore".to_string(),
            industry: industry.to_string(),
            description: "Ward duty".to_string(),
            requirements: vec![],
            date_posted: "2025-01-01".to_string(),
            archived,
        }
    }

    #[test]
    fn test_usage_count_counts_archived_jobs_too() {
        let jobs = vec![job("Healthcare", false), job("Healthcare", true)];
        assert_eq!(usage_count(&jobs, "Healthcare"), 2);
    }

    #[test]
    fn test_usage_count_is_case_sensitive() {
        let jobs = vec![job("Healthcare", false)];
        assert_eq!(usage_count(&jobs, "healthcare"), 0);
    }

    #[test]
    fn test_usage_count_unknown_label() {
        let jobs = vec![job("Shipping", false)];
        assert_eq!(usage_count(&jobs, "Defence"), 0);
    }
}
