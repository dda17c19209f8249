//! Loading [`ScoreRecord`] rows from CSV.
//!
//! A results directory holds one subdirectory per student, named
//! `student_id=<id>`, each containing any number of CSV files with a
//! `percentage_score` column and an optional `tier` column.

use crate::grading::ScoreRecord;
use anyhow::{Context, Result};
use std::fs;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const STUDENT_DIR_PREFIX: &str = "student_id=";

/// Reads every row of a single CSV file. An empty `tier` cell stays `None`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ScoreRecord>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: ScoreRecord =
            result.with_context(|| format!("invalid row in {}", path.display()))?;
        rows.push(record);
    }

    debug!(path = %path.display(), rows = rows.len(), "Loaded score records");
    Ok(rows)
}

/// Lists student ids found under `base_dir`, sorted.
pub fn load_student_ids(base_dir: &str) -> Result<Vec<String>> {
    let mut student_ids = Vec::new();

    for entry in fs::read_dir(base_dir).with_context(|| format!("failed to read {base_dir}"))? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(dir_name) = entry.file_name().to_str() {
                if let Some(student_id) = dir_name.strip_prefix(STUDENT_DIR_PREFIX) {
                    student_ids.push(student_id.to_string());
                }
            }
        }
    }

    student_ids.sort();
    Ok(student_ids)
}

/// Reads all CSV files in a student's directory, in file name order.
pub fn load_student_records(base_dir: &str, student_id: &str) -> Result<Vec<ScoreRecord>> {
    let student_dir = format!("{}/{}{}", base_dir, STUDENT_DIR_PREFIX, student_id);

    let mut paths = Vec::new();
    for entry in fs::read_dir(&student_dir).with_context(|| format!("failed to read {student_dir}"))? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("csv") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut rows = Vec::new();
    for path in paths {
        rows.extend(load_records(&path)?);
    }

    Ok(rows)
}
