//! Text canonicalization shared by skill lookup and resume matching.

use regex::Regex;

/// Lowercases `s`, replaces every character outside `[a-z0-9+.#]` with a
/// single space and trims the ends.
///
/// Interior whitespace runs are kept as-is: each source character maps to
/// exactly one output character, so offsets stay comparable for excerpts.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '+' | '.' | '#' => c,
            _ => ' ',
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Compiles a whole-word matcher for an already normalized token.
pub fn word_regex(token: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(token)))
}
