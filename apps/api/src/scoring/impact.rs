use crate::models::resume::{SectionName, Sections};
use crate::scoring::lexicon::{has_action_verb, has_number, has_outcome_word};

pub const MAX_IMPACT: f64 = 15.0;
/// Qualifying bullets needed for full impact credit.
const BULLETS_FOR_MAX: f64 = 8.0;
const MAX_LINES_PER_SECTION: usize = 100;
const IMPACT_SECTIONS: [SectionName; 2] = [SectionName::Experience, SectionName::Projects];

/// A bullet counts when it carries a number, an action verb and an outcome word.
pub fn is_impact_bullet(line: &str) -> bool {
    let lower = line.to_lowercase();
    has_number(&lower) && has_action_verb(&lower) && has_outcome_word(&lower)
}

/// Quantified-achievement density over the experience and projects sections.
pub fn impact_score(sections: &Sections) -> f64 {
    let mut total_bullets = 0usize;
    let mut hits = 0usize;

    for section in IMPACT_SECTIONS {
        for line in sections.get(section).iter().take(MAX_LINES_PER_SECTION) {
            total_bullets += 1;
            if is_impact_bullet(line) {
                hits += 1;
            }
        }
    }

    if total_bullets == 0 {
        return 0.0;
    }
    (MAX_IMPACT * (hits as f64 / BULLETS_FOR_MAX)).min(MAX_IMPACT)
}
