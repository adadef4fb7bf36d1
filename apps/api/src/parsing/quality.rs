use crate::models::resume::{SectionName, Sections};

pub const MAX_PARSE_SCORE: f64 = 20.0;
const SECTION_CREDIT: f64 = 2.5;
const SCORED_SECTIONS: [SectionName; 4] = [
    SectionName::Contact,
    SectionName::Education,
    SectionName::Experience,
    SectionName::Skills,
];

/// Extraction fidelity + section presence, clamped to [0, 20].
///
/// Fidelity is the ratio of recovered characters to uploaded bytes, doubled
/// and capped at 1, worth up to 10 points. Each non-empty core section adds 2.5.
pub fn parse_score(text: &str, upload_len: usize, sections: &Sections) -> f64 {
    let text_ratio = text.trim().chars().count() as f64 / upload_len.max(1) as f64;
    let section_count = SCORED_SECTIONS
        .iter()
        .filter(|s| !sections.get(**s).is_empty())
        .count();
    let score = 10.0 * (text_ratio * 2.0).min(1.0) + SECTION_CREDIT * section_count as f64;
    score.clamp(0.0, MAX_PARSE_SCORE)
}
