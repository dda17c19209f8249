//! Data types shared by the grading calculator and reducer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Exam difficulty track. Selects which boundary table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Foundation,
    /// Rows without a tier are graded as higher.
    #[default]
    Higher,
}

impl Tier {
    /// Highest grade obtainable on this tier.
    pub fn max_grade(self) -> u8 {
        match self {
            Tier::Foundation => 5,
            Tier::Higher => 9,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Foundation => write!(f, "foundation"),
            Tier::Higher => write!(f, "higher"),
        }
    }
}

impl FromStr for Tier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "foundation" => Ok(Tier::Foundation),
            "higher" => Ok(Tier::Higher),
            other => Err(anyhow::anyhow!(
                "unknown tier '{other}', expected 'foundation' or 'higher'"
            )),
        }
    }
}

/// A single historical result, as read from CSV or the results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub percentage_score: f64,
    #[serde(default)]
    pub tier: Option<Tier>,
}

impl ScoreRecord {
    pub fn new(percentage_score: f64, tier: Tier) -> Self {
        Self {
            percentage_score,
            tier: Some(tier),
        }
    }

    /// The record's tier, substituting [`Tier::Higher`] when none was stored.
    pub fn tier_or_default(&self) -> Tier {
        self.tier.unwrap_or_default()
    }
}

/// Color token used by dashboards to tint a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradeColor {
    Excellent,
    Good,
    Pass,
    BelowPass,
    Neutral,
}

impl GradeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            GradeColor::Excellent => "excellent",
            GradeColor::Good => "good",
            GradeColor::Pass => "pass",
            GradeColor::BelowPass => "below-pass",
            GradeColor::Neutral => "neutral",
        }
    }

    /// Tailwind classes the dashboard applies for this token.
    pub fn css_class(self) -> &'static str {
        match self {
            GradeColor::Excellent => "text-green-600 bg-green-50",
            GradeColor::Good => "text-blue-600 bg-blue-50",
            GradeColor::Pass => "text-yellow-600 bg-yellow-50",
            GradeColor::BelowPass => "text-red-600 bg-red-50",
            GradeColor::Neutral => "text-gray-600 bg-gray-50",
        }
    }
}

impl fmt::Display for GradeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade for a single score. `grade == None` means ungraded (U).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub percentage: f64,
    pub tier: Tier,
    pub grade: Option<u8>,
    pub descriptor: &'static str,
    pub color: GradeColor,
}

/// The next grade up and the boundary needed to reach it.
/// Both fields are `None` when the score is already at the tier maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextGradeInfo {
    pub next_grade: Option<u8>,
    pub percentage_needed: Option<f64>,
}

/// Aggregated results for one student.
#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub student_id: String,
    pub assessments: usize,
    pub mean_percentage: f64,
    pub stddev_percentage: f64,
    pub average_grade: Option<u8>,
    pub descriptor: &'static str,
    pub color: GradeColor,
    /// Count of results per grade label ("9".."1", "U").
    pub distribution: BTreeMap<String, usize>,
    /// Judged from `mean_percentage` against the tier of the most recent
    /// result. When the history mixes tiers, older results from the other
    /// tier still feed that mean.
    pub next: NextGradeInfo,
}
