//! GCSE grade calculation and aggregation.
//!
//! Converts percentage scores on foundation or higher tier papers into
//! grades 1–9, attaches descriptors, color tokens and next-grade guidance,
//! and reduces a student's history into a rounded average grade.
//! Everything here is pure and never fails.

pub mod aggregate;
pub mod boundaries;
pub mod calculator;
pub mod descriptor;
pub mod types;
pub mod utility;

pub use aggregate::{calculate_average_grade, summarize_student};
pub use calculator::{calculate_grade, grade_result, next_grade_info, validate_percentage};
pub use descriptor::{grade_color, grade_descriptor, improvement_suggestions};
pub use types::{GradeColor, GradeResult, NextGradeInfo, ScoreRecord, StudentSummary, Tier};
