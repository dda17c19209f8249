//! Static lookups that turn a grade into dashboard text and colors.

use crate::grading::types::{GradeColor, Tier};

/// Human label for a grade, e.g. `"Grade 9 - Exceptional"`.
pub fn grade_descriptor(grade: Option<u8>) -> &'static str {
    match grade {
        Some(9) => "Grade 9 - Exceptional",
        Some(8) => "Grade 8 - Excellent",
        Some(7) => "Grade 7 - Very Good",
        Some(6) => "Grade 6 - Good",
        Some(5) => "Grade 5 - Strong Pass",
        Some(4) => "Grade 4 - Standard Pass",
        Some(3) => "Grade 3 - Working Towards Pass",
        Some(2) => "Grade 2 - Developing",
        Some(1) => "Grade 1 - Foundation Level",
        Some(_) | None => "U (Ungraded)",
    }
}

/// Color token for a grade.
///
/// | Grade  | Token      |
/// |--------|------------|
/// | >= 7   | excellent  |
/// | >= 5   | good       |
/// | 4      | pass       |
/// | 1–3    | below-pass |
/// | U      | neutral    |
pub fn grade_color(grade: Option<u8>) -> GradeColor {
    match grade {
        Some(g) if g >= 7 => GradeColor::Excellent,
        Some(g) if g >= 5 => GradeColor::Good,
        Some(g) if g >= 4 => GradeColor::Pass,
        Some(_) => GradeColor::BelowPass,
        None => GradeColor::Neutral,
    }
}

/// Ordered study advice for a student at `grade` on `tier`.
pub fn improvement_suggestions(grade: Option<u8>, tier: Tier) -> Vec<&'static str> {
    let mut suggestions = match grade {
        None | Some(0..=3) => vec![
            "Focus on core vocabulary: learn the high-frequency words for each topic",
            "Practise present tense verb conjugations until they are automatic",
            "Use the vocabulary games daily for short, regular revision",
        ],
        Some(4..=5) => vec![
            "Add past and future tenses to your written answers",
            "Learn opinion phrases and justify them with reasons",
            "Practise listening exercises under timed conditions",
        ],
        Some(6..=7) => vec![
            "Use a wider range of complex structures and connectives",
            "Work on translation accuracy in both directions",
            "Review mark schemes to target the top-band criteria",
        ],
        Some(_) => vec![
            "Keep stretching yourself with idioms and the subjunctive",
            "Read authentic texts in the target language",
            "Polish accuracy: small errors cost marks at the top grades",
        ],
    };

    if tier == Tier::Foundation && matches!(grade, Some(4..=5)) {
        suggestions.push("Consider sitting the higher tier paper to access grades 6-9");
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_covers_every_grade() {
        for g in 1..=9 {
            assert!(grade_descriptor(Some(g)).starts_with(&format!("Grade {g} - ")));
        }
        assert_eq!(grade_descriptor(Some(9)), "Grade 9 - Exceptional");
        assert_eq!(grade_descriptor(None), "U (Ungraded)");
    }

    #[test]
    fn test_color_thresholds() {
        assert_eq!(grade_color(Some(9)), GradeColor::Excellent);
        assert_eq!(grade_color(Some(7)), GradeColor::Excellent);
        assert_eq!(grade_color(Some(6)), GradeColor::Good);
        assert_eq!(grade_color(Some(5)), GradeColor::Good);
        assert_eq!(grade_color(Some(4)), GradeColor::Pass);
        assert_eq!(grade_color(Some(3)), GradeColor::BelowPass);
        assert_eq!(grade_color(Some(1)), GradeColor::BelowPass);
        assert_eq!(grade_color(None), GradeColor::Neutral);
        assert_eq!(GradeColor::BelowPass.as_str(), "below-pass");
        assert!(GradeColor::Excellent.css_class().starts_with("text-green"));
        assert!(GradeColor::Neutral.css_class().starts_with("text-gray"));
    }

    #[test]
    fn test_suggestions_are_bucketed() {
        let low = improvement_suggestions(Some(2), Tier::Higher);
        assert_eq!(low, improvement_suggestions(None, Tier::Higher));
        assert_eq!(low.len(), 3);

        let mid = improvement_suggestions(Some(5), Tier::Higher);
        assert_ne!(mid, low);
        assert_eq!(mid, improvement_suggestions(Some(4), Tier::Higher));

        let good = improvement_suggestions(Some(7), Tier::Higher);
        let top = improvement_suggestions(Some(9), Tier::Higher);
        assert_ne!(good, top);
        assert_eq!(top, improvement_suggestions(Some(8), Tier::Higher));
    }

    #[test]
    fn test_foundation_pass_suggests_higher_tier() {
        let suggestions = improvement_suggestions(Some(5), Tier::Foundation);
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[3].contains("higher tier"));

        assert_eq!(improvement_suggestions(Some(3), Tier::Foundation).len(), 3);
    }
}
