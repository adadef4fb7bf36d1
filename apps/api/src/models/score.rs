use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Alias,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchType::Exact => f.write_str("exact"),
            MatchType::Alias => f.write_str("alias"),
        }
    }
}

/// A job skill satisfied by the resume text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchHit {
    pub skill: String,
    /// 2.0 for required skills, 1.0 for nice-to-have.
    pub weight: f64,
    pub match_type: MatchType,
    /// Up to three context windows around the match, in document order.
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub parse: f64,
    pub coverage: f64,
    pub seniority: f64,
    pub impact: f64,
    pub format_risk: f64,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> f64 {
        self.parse + self.coverage + self.seniority + self.impact + self.format_risk
    }
}

/// Final score with its explainable breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub total: f64,
    pub subscores: ScoreBreakdown,
    pub coverage_hits: Vec<MatchHit>,
    pub coverage_gaps: Vec<String>,
    pub explainability: Vec<String>,
}
