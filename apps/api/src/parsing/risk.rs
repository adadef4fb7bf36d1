//! Layout-quality heuristics over the raw extracted text.

use crate::models::resume::{ColumnHint, RiskTag};
use crate::parsing::lines::split_lines;

const TAB_THRESHOLD: usize = 20;
const REPETITION_MIN_LINES: usize = 30;
const REPETITION_THRESHOLD: usize = 2;

/// Format risks in a fixed evaluation order: tabs, column hint, header, footer.
///
/// Only the first column hint found is reported.
pub fn format_risks(text: &str) -> Vec<RiskTag> {
    let mut risks = Vec::new();

    if text.matches('\t').count() > TAB_THRESHOLD {
        risks.push(RiskTag::MulticolumnOrTablesSuspected);
    }

    let lower = text.to_lowercase();
    // TODO: report every hint once the penalty model is revisited; first match only for now.
    if let Some(hint) = ColumnHint::SCAN_ORDER
        .into_iter()
        .find(|hint| lower.contains(hint.as_str()))
    {
        risks.push(RiskTag::LayoutColumnsHint(hint));
    }

    let lines = split_lines(text);
    if lines.len() > REPETITION_MIN_LINES {
        let occurrences = |needle: &str| lines.iter().filter(|l| **l == needle).count();
        if occurrences(lines[0]) > REPETITION_THRESHOLD {
            risks.push(RiskTag::HeaderRepetition);
        }
        if occurrences(lines[lines.len() - 1]) > REPETITION_THRESHOLD {
            risks.push(RiskTag::FooterRepetition);
        }
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_repeats(header: &str, footer: &str, pages: usize) -> String {
        let mut lines = Vec::new();
        for page in 0..pages {
            lines.push(header.to_string());
            for i in 0..10 {
                lines.push(format!("Body line {page}-{i}"));
            }
            lines.push(footer.to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn test_clean_text_has_no_risks() {
        assert!(format_risks("Experience\nReduced latency by 35%").is_empty());
    }

    #[test]
    fn test_many_tabs_suspect_multicolumn() {
        let text = "a\t".repeat(25);
        assert_eq!(format_risks(&text), vec![RiskTag::MulticolumnOrTablesSuspected]);
        assert!(format_risks(&"a\t".repeat(20)).is_empty());
    }

    #[test]
    fn test_only_first_column_hint_reported() {
        let risks = format_risks("Two-Column layout with a table");
        assert_eq!(risks, vec![RiskTag::LayoutColumnsHint(ColumnHint::TwoColumn)]);

        let risks = format_risks("Columns and tables");
        assert_eq!(risks, vec![RiskTag::LayoutColumnsHint(ColumnHint::Columns)]);
    }

    #[test]
    fn test_header_and_footer_repetition() {
        let text = page_with_repeats("JANE DOE - RESUME", "Page footer", 3);
        assert_eq!(
            format_risks(&text),
            vec![RiskTag::HeaderRepetition, RiskTag::FooterRepetition]
        );
    }

    #[test]
    fn test_repetition_needs_more_than_thirty_lines() {
        // 2 pages = 24 lines
        let text = page_with_repeats("Header", "Footer", 2);
        assert!(format_risks(&text).is_empty());
    }

    #[test]
    fn test_repetition_across_form_fed_pages() {
        let pages: Vec<String> = (0..4)
            .map(|page| {
                let body: Vec<String> = (0..8).map(|i| format!("Body line {page}-{i}")).collect();
                format!("JANE DOE\r{}\rPage footer", body.join("\r"))
            })
            .collect();
        assert_eq!(
            format_risks(&pages.join("\x0c")),
            vec![RiskTag::HeaderRepetition, RiskTag::FooterRepetition]
        );
    }

    #[test]
    fn test_header_seen_twice_is_not_repetition() {
        let mut text = page_with_repeats("Header", "Footer", 3);
        text = text.replacen("Header", "Different", 1);
        assert_eq!(format_risks(&text), vec![RiskTag::FooterRepetition]);
    }
}
