//! Bullet rewrite suggestions — a standalone heuristic, independent of scoring.
//!
//! Never invents metrics: a bullet without a number gets a rationale asking
//! for one and a bracketed outcome placeholder instead.

pub mod handlers;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::scoring::lexicon::{has_number, has_outcome_word, ACTION_VERBS};

const DEFAULT_VERB: &str = "Implemented";
const OUTCOME_PROMPT: &str = " — resulting in [outcome e.g., 35% lower latency].";
const TRACKED_VERBS: [&str; 4] = ["implemented", "optimized", "reduced", "increased"];

static WEAK_PHRASES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(responsible for|worked on|helped)\b").expect("static regex")
});

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub bullet: String,
    /// Accepted for future JD-aware rewrites; not used by the heuristic yet.
    #[serde(default)]
    #[allow(dead_code)]
    pub jd_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestResponse {
    pub suggestion: String,
    pub rationale: String,
    pub changed_tokens: Vec<String>,
}

pub fn suggest_rewrite(bullet: &str) -> SuggestResponse {
    let original = bullet.trim();
    let lower = original.to_lowercase();

    let rationale = if has_number(&lower) {
        "Good: metric present. Tightened verb + outcome focus."
    } else {
        "Add a concrete metric (%, ms, ₹) tied to outcome; we won’t invent it."
    };

    let starts_with_verb = ACTION_VERBS
        .iter()
        .any(|v| lower.starts_with(&format!("{v} ")));
    let rewritten = if starts_with_verb {
        original.to_string()
    } else {
        prefix_default_verb(original)
    };

    let mut suggestion = WEAK_PHRASES_RE.replace_all(&rewritten, "").trim().to_string();
    if !has_outcome_word(&suggestion.to_lowercase()) {
        suggestion.push_str(OUTCOME_PROMPT);
    }

    let suggestion_lower = suggestion.to_lowercase();
    let changed_tokens = TRACKED_VERBS
        .iter()
        .filter(|v| suggestion_lower.contains(*v) && !lower.contains(*v))
        .map(|v| v.to_string())
        .collect();

    SuggestResponse {
        suggestion,
        rationale: rationale.to_string(),
        changed_tokens,
    }
}

/// "Fixed the cache" → "Implemented fixed the cache".
fn prefix_default_verb(bullet: &str) -> String {
    let mut chars = bullet.chars();
    match chars.next() {
        Some(first) => format!("{DEFAULT_VERB} {}{}", first.to_lowercase(), chars.as_str()),
        None => DEFAULT_VERB.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_bullet_kept_with_metric_rationale() {
        let out = suggest_rewrite("Reduced latency by 35% using caching");
        assert_eq!(out.suggestion, "Reduced latency by 35% using caching");
        assert!(out.rationale.starts_with("Good: metric present"));
        assert!(out.changed_tokens.is_empty());
    }

    #[test]
    fn test_weak_bullet_gets_verb_and_outcome_prompt() {
        let out = suggest_rewrite("  Worked on the payments API  ");
        assert_eq!(
            out.suggestion,
            "Implemented  the payments API — resulting in [outcome e.g., 35% lower latency]."
        );
        assert!(out.rationale.starts_with("Add a concrete metric"));
        assert_eq!(out.changed_tokens, vec!["implemented"]);
    }

    #[test]
    fn test_weak_phrase_removed_after_action_verb() {
        let out = suggest_rewrite("Led and helped migrate 3 services, cutting cost");
        assert_eq!(out.suggestion, "Led and  migrate 3 services, cutting cost");
        assert!(out.changed_tokens.is_empty());
    }

    #[test]
    fn test_existing_tracked_verb_not_reported_as_changed() {
        let out = suggest_rewrite("Team implemented caching for 2 services");
        assert!(out.suggestion.starts_with("Implemented team implemented caching"));
        assert!(out.changed_tokens.is_empty());
    }

    #[test]
    fn test_prefix_default_verb_on_empty() {
        assert_eq!(prefix_default_verb(""), "Implemented");
    }
}
