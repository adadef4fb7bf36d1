//! Word lists and patterns shared by impact scoring and bullet suggestions.

use std::sync::LazyLock;

use regex::Regex;

pub const ACTION_VERBS: &[&str] = &[
    "improved",
    "reduced",
    "increased",
    "decreased",
    "boosted",
    "cut",
    "optimized",
    "accelerated",
    "launched",
    "built",
    "designed",
    "implemented",
    "shipped",
    "delivered",
    "migrated",
    "refactored",
    "automated",
    "scaled",
    "hardened",
    "secured",
    "led",
    "mentored",
];

pub const OUTCOME_WORDS: &[&str] = &[
    "latency",
    "throughput",
    "revenue",
    "cost",
    "error",
    "downtime",
    "availability",
    "conversion",
    "retention",
    "adoption",
    "accuracy",
    "precision",
    "recall",
    "f1",
    "coverage",
];

/// A number or percentage token, e.g. `35`, `2.5`, `40%`.
pub static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?%?\b").expect("static regex"));

pub fn has_number(text: &str) -> bool {
    NUMBER_RE.is_match(text)
}

/// Substring test against the action verb list; `text` must be lowercased.
pub fn has_action_verb(text: &str) -> bool {
    ACTION_VERBS.iter().any(|v| text.contains(v))
}

/// Substring test against the outcome word list; `text` must be lowercased.
pub fn has_outcome_word(text: &str) -> bool {
    OUTCOME_WORDS.iter().any(|o| text.contains(o))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_token_variants() {
        assert!(has_number("by 35%"));
        assert!(has_number("2.5 seconds"));
        assert!(has_number("10 engineers"));
        assert!(!has_number("no metrics here"));
    }

    #[test]
    fn test_verb_and_outcome_lookup() {
        assert!(has_action_verb("reduced latency"));
        assert!(!has_action_verb("was responsible for"));
        assert!(has_outcome_word("lower error rate"));
        assert!(!has_outcome_word("wrote documentation"));
    }
}
