use std::sync::LazyLock;

use std::num::IntErrorKind;

use regex::Regex;

use crate::models::job::Job;

pub const MAX_SENIORITY: f64 = 15.0;
const OVERQUALIFIED_PENALTY_PER_YEAR: f64 = 3.0;
const DEFAULT_MAX_YEARS: i64 = 10;

static YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*\+?\s*years").expect("static regex"));

/// Largest "<n> years" / "<n>+ years" figure in the text, or 0.
pub fn declared_years(text: &str) -> i64 {
    let lower = text.to_lowercase();
    YEARS_RE
        .captures_iter(&lower)
        .filter_map(|c| parse_years(&c[1]))
        .fold(0, i64::max)
}

/// Digit runs too long for `i64` saturate instead of being skipped.
fn parse_years(digits: &str) -> Option<i64> {
    match digits.parse::<i64>() {
        Ok(years) => Some(years),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(_) => None,
    }
}

/// Years-of-experience fit against the job's range.
///
/// No range ⇒ full credit. Below the minimum ramps linearly from zero;
/// above the maximum loses 3 points per extra year, floored at zero.
/// A zero `max_years` counts as unset.
pub fn seniority_score(resume_text: &str, job: &Job) -> f64 {
    if job.min_years.is_none() && job.max_years.is_none() {
        return MAX_SENIORITY;
    }

    let years = declared_years(resume_text);
    let min_years = job.min_years.unwrap_or(0);
    let max_years = job
        .max_years
        .filter(|&m| m != 0)
        .unwrap_or_else(|| min_years.max(DEFAULT_MAX_YEARS));

    if years < min_years {
        return (MAX_SENIORITY * (years as f64 / (min_years as f64).max(1.0))).max(0.0);
    }
    if years > max_years {
        let excess = years.saturating_sub(max_years) as f64;
        return (MAX_SENIORITY - OVERQUALIFIED_PENALTY_PER_YEAR * excess).max(0.0);
    }
    MAX_SENIORITY
}
