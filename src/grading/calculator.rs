use crate::grading::boundaries::{boundaries, min_percentage};
use crate::grading::descriptor::{grade_color, grade_descriptor};
use crate::grading::types::{GradeResult, NextGradeInfo, Tier};
use crate::grading::utility::round_one_decimal;
use anyhow::{Result, bail};

/// Grade awarded on the higher tier when no boundary is reached.
pub const HIGHER_TIER_FLOOR: u8 = 3;

/// Converts a percentage score into a GCSE grade for `tier`.
///
/// The score is rounded to one decimal place, then the boundary table is
/// scanned from the top grade down and the first boundary at or below the
/// score wins. Inputs outside 0–100 are not rejected: 150 yields the top
/// grade, a negative score falls through to the bottom.
///
/// Below the lowest boundary the tiers differ:
/// - foundation returns `None` (ungraded, U)
/// - higher returns [`HIGHER_TIER_FLOOR`] and never `None`
///
/// The higher tier floor is product policy for students entered at higher
/// tier; keep it until that policy changes.
pub fn calculate_grade(percentage: f64, tier: Tier) -> Option<u8> {
    let score = round_one_decimal(percentage);

    let matched = boundaries(tier)
        .iter()
        .find(|(_, min)| score >= *min)
        .map(|(grade, _)| *grade);

    match tier {
        Tier::Foundation => matched,
        Tier::Higher => Some(matched.unwrap_or(HIGHER_TIER_FLOOR)),
    }
}

/// Rejects scores that are not finite or fall outside 0–100.
///
/// [`calculate_grade`] itself accepts anything; callers taking user input
/// run this first.
pub fn validate_percentage(percentage: f64) -> Result<f64> {
    if !percentage.is_finite() {
        bail!("percentage must be a finite number, got {percentage}");
    }
    if !(0.0..=100.0).contains(&percentage) {
        bail!("percentage must be between 0 and 100, got {percentage}");
    }
    Ok(percentage)
}

/// Grades `percentage` and attaches the descriptor and color token.
pub fn grade_result(percentage: f64, tier: Tier) -> GradeResult {
    let grade = calculate_grade(percentage, tier);

    GradeResult {
        percentage: round_one_decimal(percentage),
        tier,
        grade,
        descriptor: grade_descriptor(grade),
        color: grade_color(grade),
    }
}

/// Returns the next grade above the one `percentage` earns and the boundary
/// needed for it. At the tier maximum both fields are `None`.
pub fn next_grade_info(percentage: f64, tier: Tier) -> NextGradeInfo {
    let next_grade = match calculate_grade(percentage, tier) {
        Some(grade) if grade >= tier.max_grade() => None,
        Some(grade) => Some(grade + 1),
        None => Some(1),
    };

    match next_grade.and_then(|g| min_percentage(tier, g).map(|min| (g, min))) {
        Some((grade, min)) => NextGradeInfo {
            next_grade: Some(grade),
            percentage_needed: Some(min),
        },
        None => NextGradeInfo {
            next_grade: None,
            percentage_needed: None,
        },
    }
}
