use crate::grading::{StudentSummary, summarize_student};
use crate::output::write_json;
use crate::records::{load_student_ids, load_student_records};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Class-wide index of student summaries, written as a single JSON document.
#[derive(Debug, Serialize)]
pub struct ClassReport {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub students: Vec<StudentSummary>,
}

/// Summarizes every `student_id=<id>` directory under `base_dir`.
/// Students without any rows are skipped.
pub fn build_report(base_dir: &str) -> Result<ClassReport> {
    let student_ids = load_student_ids(base_dir)?;
    let mut students = Vec::new();

    for student_id in student_ids {
        let rows = load_student_records(base_dir, &student_id)?;
        if rows.is_empty() {
            warn!(student_id = %student_id, "No results for student, skipping");
            continue;
        }

        students.push(summarize_student(&student_id, &rows));
    }

    Ok(ClassReport {
        schema_version: 1,
        generated_at: Utc::now(),
        students,
    })
}

/// Builds the report for `base_dir` and writes it to `output_path`.
#[tracing::instrument]
pub fn write_report(base_dir: &str, output_path: &str) -> Result<ClassReport> {
    let report = build_report(base_dir)?;
    write_json(output_path, &report)?;

    info!(students = report.students.len(), output_path, "Class report written");
    Ok(report)
}
