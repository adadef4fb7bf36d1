//! PII detection over the raw extracted text.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::Pii;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("static regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?:\+\d{1,3}[ -]?)?(?:\d{3}[ -]?){2}\d{4})").expect("static regex")
});

/// Extension point for person-name detection.
///
/// Carried in `AppState` as `Arc<dyn NameExtractor>` so an NER-backed
/// implementation can be swapped in without touching the parse pipeline.
pub trait NameExtractor: Send + Sync {
    fn extract_names(&self, text: &str) -> Vec<String>;
}

/// Default extractor: detects no names.
pub struct NoopNameExtractor;

impl NameExtractor for NoopNameExtractor {
    fn extract_names(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Emails and phone numbers in scan order, duplicates kept.
pub fn detect_pii(text: &str, names: &dyn NameExtractor) -> Pii {
    Pii {
        emails: EMAIL_RE.find_iter(text).map(|m| m.as_str().to_string()).collect(),
        phones: PHONE_RE.find_iter(text).map(|m| m.as_str().to_string()).collect(),
        names: names.extract_names(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedNames;

    impl NameExtractor for FixedNames {
        fn extract_names(&self, _text: &str) -> Vec<String> {
            vec!["Jane Doe".to_string()]
        }
    }

    #[test]
    fn test_emails_in_order_with_duplicates() {
        let pii = detect_pii(
            "jane.doe@example.com | alt: j_d+jobs@mail.co.in | jane.doe@example.com",
            &NoopNameExtractor,
        );
        assert_eq!(
            pii.emails,
            vec!["jane.doe@example.com", "j_d+jobs@mail.co.in", "jane.doe@example.com"]
        );
    }

    #[test]
    fn test_phone_shapes() {
        let pii = detect_pii(
            "Call +91 987-654-3210 or 555 123 4567 or 5551234567",
            &NoopNameExtractor,
        );
        assert_eq!(pii.phones, vec!["+91 987-654-3210", "555 123 4567", "5551234567"]);
    }

    #[test]
    fn test_phone_digits_match_any_script() {
        let pii = detect_pii("फ़ोन ९८७६५४३२१० only", &NoopNameExtractor);
        assert_eq!(pii.phones, vec!["९८७६५४३२१०"]);
    }

    #[test]
    fn test_short_numbers_are_not_phones() {
        let pii = detect_pii("Reduced latency by 35% across 120 services", &NoopNameExtractor);
        assert!(pii.phones.is_empty());
        assert!(pii.emails.is_empty());
    }

    #[test]
    fn test_noop_extractor_returns_no_names() {
        assert!(detect_pii("Jane Doe", &NoopNameExtractor).names.is_empty());
    }

    #[test]
    fn test_custom_extractor_is_used() {
        assert_eq!(detect_pii("", &FixedNames).names, vec!["Jane Doe"]);
    }
}
