//! Export formatter.
//!
//! Pure projection of store state into a two-sheet document: the full job
//! set (requirements flattened) and the industry labels with usage counts.
//! Served either as JSON or as CSV with a UTF-8 BOM so spreadsheet tools
//! open it correctly.

use serde::Serialize;

use crate::models::industry::{usage_count, IndustryUsage};
use crate::models::job::JobRecord;

/// Delimiter used when flattening a job's requirement list into one cell.
const REQUIREMENTS_DELIMITER: &str = "; ";

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "erp21-jobs-export.csv",
            ExportFormat::Json => "erp21-jobs-export.json",
        }
    }
}

/// One flattened job row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: String,
    pub title: String,
    pub location: String,
    pub industry: String,
    pub description: String,
    pub requirements: String,
    pub date_posted: String,
    pub archived: bool,
}

/// The full export document: jobs sheet plus industries sheet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub jobs: Vec<JobRow>,
    pub industries: Vec<IndustryUsage>,
}

impl ExportDocument {
    /// Builds the document from current store state.
    pub fn build(jobs: &[JobRecord], labels: &[String]) -> Self {
        let rows = jobs
            .iter()
            .map(|job| JobRow {
                id: job.id.clone(),
                title: job.title.clone(),
                location: job.location.clone(),
                industry: job.industry.clone(),
                description: job.description.clone(),
                requirements: job.requirements.join(REQUIREMENTS_DELIMITER),
                date_posted: job.date_posted.clone(),
                archived: job.archived,
            })
            .collect();

        let industries = labels
            .iter()
            .map(|label| {
                let count = usage_count(jobs, label);
                IndustryUsage {
                    label: label.clone(),
                    usage_count: count,
                    removable: count == 0,
                }
            })
            .collect();

        Self {
            jobs: rows,
            industries,
        }
    }

    /// Renders both sheets as CSV. Starts with a UTF-8 BOM; the two sheets
    /// are separated by a blank line and titled like workbook tabs.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push('\u{FEFF}');

        csv.push_str("Jobs\n");
        csv.push_str("ID,Title,Location,Industry,Description,Requirements,Date Posted,Archived\n");
        for row in &self.jobs {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                csv_escape(&row.id),
                csv_escape(&row.title),
                csv_escape(&row.location),
                csv_escape(&row.industry),
                csv_escape(&row.description),
                csv_escape(&row.requirements),
                csv_escape(&row.date_posted),
                row.archived,
            ));
        }

        csv.push('\n');
        csv.push_str("Industries\n");
        csv.push_str("Label,Jobs Using,Removable\n");
        for industry in &self.industries {
            csv.push_str(&format!(
                "{},{},{}\n",
                csv_escape(&industry.label),
                industry.usage_count,
                industry.removable,
            ));
        }

        csv
    }
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
