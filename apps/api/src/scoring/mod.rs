// Scoring core: coverage, seniority, impact and format-risk sub-scores
// aggregated with the parse score into an explainable total.
// Every function here is pure; the ontology is the only shared input.

pub mod coverage;
pub mod format_risk;
pub mod handlers;
pub mod impact;
pub mod lexicon;
pub mod normalize;
pub mod ontology;
pub mod seniority;

use tracing::debug;

use crate::models::job::Job;
use crate::models::resume::ParsedResume;
use crate::models::score::{MatchHit, ScoreBreakdown, ScoreResult};
use crate::scoring::coverage::coverage_score;
use crate::scoring::format_risk::format_risk_score;
use crate::scoring::impact::impact_score;
use crate::scoring::ontology::SkillOntology;
use crate::scoring::seniority::seniority_score;

/// Scores a parsed resume against a job. Total for any input.
///
/// Sub-scores are kept unrounded; the total is rounded to 2 decimals once.
pub fn score(parsed: &ParsedResume, job: &Job, ontology: &SkillOntology) -> ScoreResult {
    let coverage = coverage_score(&parsed.ats_view_text, job, ontology);

    let subscores = ScoreBreakdown {
        parse: parsed.parse_score,
        coverage: coverage.value,
        seniority: seniority_score(&parsed.ats_view_text, job),
        impact: impact_score(&parsed.sections),
        format_risk: format_risk_score(&parsed.risks),
    };
    let total = round2(subscores.sum());

    debug!(
        total,
        hits = coverage.hits.len(),
        gaps = coverage.misses.len(),
        "Scored resume against '{}'",
        job.title
    );

    let explainability = coverage.hits.iter().map(explain_hit).collect();

    ScoreResult {
        total,
        subscores,
        coverage_hits: coverage.hits,
        coverage_gaps: coverage.misses,
        explainability,
    }
}

fn explain_hit(hit: &MatchHit) -> String {
    match hit.locations.first() {
        Some(excerpt) => format!(
            "{}: {} -> e.g. \"{}\"",
            hit.skill,
            hit.match_type,
            excerpt.replace('\n', " ")
        ),
        None => format!("{}: {}", hit.skill, hit.match_type),
    }
}

/// Two-decimal rounding of the exact binary value, ties to even.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
