//! Coverage Matcher — weighted job-skill coverage over the resume text.
//!
//! Algorithm:
//! 1. Normalize the resume text once.
//! 2. For each required skill, then each nice-to-have skill (input order):
//!    expand through the ontology and take the first candidate found as a
//!    whole word. Required hits weigh 2.0, nice-to-have hits 1.0.
//! 3. coverage = 40 × achieved / max_points, or 40 when the job lists no skills.

use regex::Regex;
use tracing::warn;

use crate::models::job::Job;
use crate::models::score::{MatchHit, MatchType};
use crate::scoring::normalize::{normalize, word_regex};
use crate::scoring::ontology::SkillOntology;

pub const MAX_COVERAGE: f64 = 40.0;
pub const REQUIRED_WEIGHT: f64 = 2.0;
pub const NICE_WEIGHT: f64 = 1.0;

const EXCERPT_CONTEXT_CHARS: usize = 40;
const MAX_EXCERPTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    pub value: f64,
    pub hits: Vec<MatchHit>,
    pub misses: Vec<String>,
}

pub fn coverage_score(resume_text: &str, job: &Job, ontology: &SkillOntology) -> Coverage {
    let required: Vec<String> = job.required_skills().iter().map(|s| normalize(s)).collect();
    let nice: Vec<String> = job.nice_skills().iter().map(|s| normalize(s)).collect();
    let resume = normalize(resume_text);

    let mut hits = Vec::new();
    let mut misses = Vec::new();

    let weighted = required
        .iter()
        .map(|s| (s, REQUIRED_WEIGHT))
        .chain(nice.iter().map(|s| (s, NICE_WEIGHT)));
    for (skill, weight) in weighted {
        match find_skill(&resume, skill, weight, ontology) {
            Some(hit) => hits.push(hit),
            None => misses.push(skill.clone()),
        }
    }

    let max_points = REQUIRED_WEIGHT * required.len() as f64 + NICE_WEIGHT * nice.len() as f64;
    let achieved: f64 = hits.iter().map(|h| h.weight).sum();
    let value = if max_points > 0.0 {
        MAX_COVERAGE * (achieved / max_points)
    } else {
        MAX_COVERAGE
    };

    Coverage {
        value,
        hits,
        misses,
    }
}

/// First candidate token of `skill` present in `resume` as a whole word.
fn find_skill(resume: &str, skill: &str, weight: f64, ontology: &SkillOntology) -> Option<MatchHit> {
    for token in ontology.expand(skill) {
        let re = match word_regex(&token) {
            Ok(re) => re,
            Err(e) => {
                warn!("Skipping unmatchable skill token '{token}': {e}");
                continue;
            }
        };
        if re.is_match(resume) {
            return Some(MatchHit {
                skill: skill.to_string(),
                weight,
                match_type: if token == skill {
                    MatchType::Exact
                } else {
                    MatchType::Alias
                },
                locations: find_locations(resume, &token),
            });
        }
    }
    None
}

/// Up to three non-overlapping context windows around `token`.
fn find_locations(resume: &str, token: &str) -> Vec<String> {
    let pattern = format!(
        r"(.{{0,{n}}}\b{token}\b.{{0,{n}}})",
        n = EXCERPT_CONTEXT_CHARS,
        token = regex::escape(token)
    );
    match Regex::new(&pattern) {
        Ok(re) => re
            .find_iter(resume)
            .take(MAX_EXCERPTS)
            .map(|m| m.as_str().to_string())
            .collect(),
        Err(e) => {
            warn!("Could not build excerpt matcher for '{token}': {e}");
            Vec::new()
        }
    }
}
