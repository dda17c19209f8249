use crate::grading::types::Tier;

/// Foundation tier minimum percentages, highest grade first.
///
/// | Grade | Min % |
/// |-------|-------|
/// | 5     | 70    |
/// | 4     | 55    |
/// | 3     | 40    |
/// | 2     | 25    |
/// | 1     | 10    |
static FOUNDATION: &[(u8, f64)] = &[(5, 70.0), (4, 55.0), (3, 40.0), (2, 25.0), (1, 10.0)];

/// Higher tier minimum percentages, highest grade first.
///
/// | Grade | Min % |
/// |-------|-------|
/// | 9     | 80    |
/// | 8     | 70    |
/// | 7     | 60    |
/// | 6     | 50    |
/// | 5     | 40    |
/// | 4     | 30    |
static HIGHER: &[(u8, f64)] = &[
    (9, 80.0),
    (8, 70.0),
    (7, 60.0),
    (6, 50.0),
    (5, 40.0),
    (4, 30.0),
];

/// Returns the `(grade, min_percentage)` pairs for `tier`, highest grade first.
pub fn boundaries(tier: Tier) -> &'static [(u8, f64)] {
    match tier {
        Tier::Foundation => FOUNDATION,
        Tier::Higher => HIGHER,
    }
}

/// Minimum percentage for `grade` on `tier`, if the tier defines that grade.
pub fn min_percentage(tier: Tier, grade: u8) -> Option<f64> {
    boundaries(tier)
        .iter()
        .find(|(g, _)| *g == grade)
        .map(|(_, min)| *min)
}
