use crate::grading::calculator::{calculate_grade, next_grade_info};
use crate::grading::descriptor::{grade_color, grade_descriptor};
use crate::grading::types::{ScoreRecord, StudentSummary};
use crate::grading::utility::{mean, round_half_up, stddev};
use std::collections::BTreeMap;

/// Rounded mean grade across `results`, which may mix tiers.
///
/// Records without a tier are graded as higher. Ungraded results are left
/// out of the mean; returns `None` when nothing gradeable remains.
pub fn calculate_average_grade(results: &[ScoreRecord]) -> Option<u8> {
    let grades: Vec<f64> = results
        .iter()
        .filter_map(|r| calculate_grade(r.percentage_score, r.tier_or_default()))
        .map(f64::from)
        .collect();

    if grades.is_empty() {
        return None;
    }

    Some(round_half_up(mean(&grades)) as u8)
}

/// Label used as a distribution key: the grade number, or `"U"`.
pub fn grade_label(grade: Option<u8>) -> String {
    grade.map_or_else(|| "U".to_string(), |g| g.to_string())
}

/// Builds the dashboard summary for one student's results.
///
/// Next-grade guidance is computed from the mean percentage on the tier of
/// the most recent record.
pub fn summarize_student(student_id: &str, results: &[ScoreRecord]) -> StudentSummary {
    let percentages: Vec<f64> = results.iter().map(|r| r.percentage_score).collect();
    let mean_percentage = mean(&percentages);
    let stddev_percentage = stddev(&percentages, mean_percentage);

    let mut distribution = BTreeMap::new();
    for record in results {
        let grade = calculate_grade(record.percentage_score, record.tier_or_default());
        *distribution.entry(grade_label(grade)).or_insert(0) += 1;
    }

    let average_grade = calculate_average_grade(results);
    let latest_tier = results
        .last()
        .map(ScoreRecord::tier_or_default)
        .unwrap_or_default();

    StudentSummary {
        student_id: student_id.to_string(),
        assessments: results.len(),
        mean_percentage,
        stddev_percentage,
        average_grade,
        descriptor: grade_descriptor(average_grade),
        color: grade_color(average_grade),
        distribution,
        next: next_grade_info(mean_percentage, latest_tier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::types::{GradeColor, Tier};

    #[test]
    fn test_average_of_empty_is_none() {
        assert_eq!(calculate_average_grade(&[]), None);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let results = vec![
            ScoreRecord::new(80.0, Tier::Higher),
            ScoreRecord::new(60.0, Tier::Higher),
        ];
        // 9 and 7 -> 8
        assert_eq!(calculate_average_grade(&results), Some(8));

        let results = vec![
            ScoreRecord::new(80.0, Tier::Higher),
            ScoreRecord::new(50.0, Tier::Higher),
        ];
        // 9 and 6 -> 7.5 -> 8
        assert_eq!(calculate_average_grade(&results), Some(8));
    }

    #[test]
    fn test_average_skips_ungraded_foundation() {
        let results = vec![
            ScoreRecord::new(5.0, Tier::Foundation),
            ScoreRecord::new(70.0, Tier::Foundation),
            ScoreRecord::new(40.0, Tier::Foundation),
        ];
        // 5 and 3 -> 4; the U is dropped
        assert_eq!(calculate_average_grade(&results), Some(4));

        let all_ungraded = vec![
            ScoreRecord::new(0.0, Tier::Foundation),
            ScoreRecord::new(9.9, Tier::Foundation),
        ];
        assert_eq!(calculate_average_grade(&all_ungraded), None);
    }

    #[test]
    fn test_average_defaults_missing_tier_to_higher() {
        let results = vec![ScoreRecord {
            percentage_score: 0.0,
            tier: None,
        }];
        // Higher floor, not ungraded.
        assert_eq!(calculate_average_grade(&results), Some(3));
    }

    #[test]
    fn test_average_mixes_tiers() {
        let results = vec![
            ScoreRecord::new(70.0, Tier::Foundation),
            ScoreRecord::new(80.0, Tier::Higher),
        ];
        // 5 and 9 -> 7
        assert_eq!(calculate_average_grade(&results), Some(7));
    }

    #[test]
    fn test_summarize_student() {
        let results = vec![
            ScoreRecord::new(5.0, Tier::Foundation),
            ScoreRecord::new(72.0, Tier::Higher),
            ScoreRecord::new(64.0, Tier::Higher),
        ];
        let summary = summarize_student("s-1", &results);

        assert_eq!(summary.student_id, "s-1");
        assert_eq!(summary.assessments, 3);
        assert_eq!(summary.mean_percentage, 47.0);
        assert!(summary.stddev_percentage > 0.0);
        // 8 and 7 -> 7.5 -> 8
        assert_eq!(summary.average_grade, Some(8));
        assert_eq!(summary.descriptor, "Grade 8 - Excellent");
        assert_eq!(summary.color, GradeColor::Excellent);
        assert_eq!(summary.distribution.get("U"), Some(&1));
        assert_eq!(summary.distribution.get("8"), Some(&1));
        assert_eq!(summary.distribution.get("7"), Some(&1));
        // 47% on higher is a 5, next is 6 at 50.
        assert_eq!(summary.next.next_grade, Some(6));
        assert_eq!(summary.next.percentage_needed, Some(50.0));
    }

    #[test]
    fn test_summary_next_grade_uses_latest_tier() {
        let foundation_last = vec![
            ScoreRecord::new(60.0, Tier::Higher),
            ScoreRecord::new(50.0, Tier::Foundation),
        ];
        // mean 55 on foundation is a 4, next is 5 at 70
        let summary = summarize_student("mixed", &foundation_last);
        assert_eq!(summary.next.next_grade, Some(5));
        assert_eq!(summary.next.percentage_needed, Some(70.0));

        let higher_last = vec![
            ScoreRecord::new(50.0, Tier::Foundation),
            ScoreRecord::new(60.0, Tier::Higher),
        ];
        // same mean on higher is a 6, next is 7 at 60
        let summary = summarize_student("mixed", &higher_last);
        assert_eq!(summary.next.next_grade, Some(7));
        assert_eq!(summary.next.percentage_needed, Some(60.0));
    }

    #[test]
    fn test_summarize_student_without_results() {
        let summary = summarize_student("empty", &[]);
        assert_eq!(summary.assessments, 0);
        assert_eq!(summary.average_grade, None);
        assert_eq!(summary.descriptor, "U (Ungraded)");
        assert!(summary.distribution.is_empty());
    }
}
