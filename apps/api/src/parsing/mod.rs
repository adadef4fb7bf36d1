// Resume parsing: upload decoding, segmentation, PII and layout-risk detection.
// Produces the `ParsedResume` consumed by the scoring core.

pub mod extract;
pub mod handlers;
pub mod lines;
pub mod pii;
pub mod quality;
pub mod risk;
pub mod sections;

use crate::models::resume::{ParsedResume, RiskTag};
use crate::parsing::extract::extract;
use crate::parsing::pii::{detect_pii, NameExtractor};
use crate::parsing::quality::parse_score;
use crate::parsing::risk::format_risks;
use crate::parsing::sections::guess_sections;

/// Full parse of an uploaded file. Never fails; extraction problems surface as risks.
pub fn parse_resume(bytes: &[u8], filename: &str, names: &dyn NameExtractor) -> ParsedResume {
    let extracted = extract(bytes, filename);
    analyze_text(extracted.text, extracted.risks, bytes.len(), names)
}

/// Builds a `ParsedResume` from already extracted text and extraction risks.
/// Format risks are appended after the extraction risks.
pub fn analyze_text(
    text: String,
    mut risks: Vec<RiskTag>,
    upload_len: usize,
    names: &dyn NameExtractor,
) -> ParsedResume {
    let sections = guess_sections(&text);
    let pii = detect_pii(&text, names);
    risks.extend(format_risks(&text));
    let parse_score = parse_score(&text, upload_len, &sections);

    ParsedResume {
        parse_score,
        sections,
        ats_view_text: text,
        risks,
        pii,
    }
}
