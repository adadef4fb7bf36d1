//! Section Segmenter — splits raw resume text into the six fixed blocks.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::{SectionName, Sections};
use crate::parsing::lines::split_lines;

/// Whole-line heading patterns, tested in priority order.
static HEADINGS: LazyLock<Vec<(Regex, SectionName)>> = LazyLock::new(|| {
    [
        (r"^(contact|contacts)$", SectionName::Contact),
        (r"^(education|academics)$", SectionName::Education),
        (r"^(experience|work experience|internship)s?$", SectionName::Experience),
        (r"^(project|projects)$", SectionName::Projects),
        (r"^(skills|technical skills)$", SectionName::Skills),
    ]
    .into_iter()
    .map(|(pattern, section)| (Regex::new(pattern).expect("static regex"), section))
    .collect()
});

/// Section switched to by `line` if it is a heading.
pub fn heading_for(line: &str) -> Option<SectionName> {
    let lower = line.trim().to_lowercase();
    HEADINGS
        .iter()
        .find(|(re, _)| re.is_match(&lower))
        .map(|(_, section)| *section)
}

/// Assigns every trimmed line to the section most recently opened by a
/// heading (`other` before the first one). Heading lines are consumed.
pub fn guess_sections(text: &str) -> Sections {
    let mut sections = Sections::default();
    let mut current = SectionName::Other;

    for line in split_lines(text).into_iter().map(str::trim) {
        match heading_for(line) {
            Some(section) => current = section,
            None => sections.get_mut(current).push(line.to_string()),
        }
    }
    sections
}
