//! Skill Ontology — canonical skill names and their alternate surface forms.
//!
//! Built once at startup (seed table or JSON file) and shared read-only via
//! `Arc<SkillOntology>` in `AppState`. Nothing mutates it after construction.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::scoring::normalize::{normalize, word_regex};

/// Seed ontology. Extend per niche via `SKILL_ONTOLOGY_PATH`.
const SEED_ONTOLOGY: &[(&str, &[&str])] = &[
    ("python", &["py", "python3", "py3"]),
    ("fastapi", &[]),
    ("django", &[]),
    ("flask", &[]),
    ("postgres", &["postgresql", "psql"]),
    ("mysql", &[]),
    ("mongodb", &["mongo"]),
    ("redis", &[]),
    ("celery", &[]),
    ("kafka", &[]),
    ("docker", &[]),
    ("kubernetes", &["k8s"]),
    ("aws", &["amazon web services", "lambda", "s3", "ec2"]),
    ("gcp", &["google cloud"]),
    ("azure", &[]),
    ("git", &["github", "gitlab"]),
    ("linux", &[]),
];

/// On-disk entry shape: `{"python": {"aliases": ["py"]}}`.
#[derive(Debug, Deserialize)]
struct OntologyEntry {
    #[serde(default)]
    aliases: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SkillOntology {
    /// normalized canonical name → normalized aliases, in declaration order
    entries: HashMap<String, Vec<String>>,
}

impl SkillOntology {
    pub fn builtin() -> Self {
        Self::from_pairs(
            SEED_ONTOLOGY
                .iter()
                .map(|(skill, aliases)| (*skill, aliases.iter().copied())),
        )
    }

    fn from_pairs<'a, A>(pairs: impl IntoIterator<Item = (&'a str, A)>) -> Self
    where
        A: IntoIterator<Item = &'a str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(skill, aliases)| (normalize(skill), aliases.into_iter().map(normalize).collect()))
            .collect();
        Self { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, OntologyEntry> =
            serde_json::from_str(json).context("Skill ontology JSON is malformed")?;
        Ok(Self::from_pairs(raw.iter().map(|(skill, entry)| {
            (skill.as_str(), entry.aliases.iter().map(String::as_str))
        })))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill ontology at {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Candidate tokens for `skill`: the normalized skill first, then its
    /// aliases. Unknown skills expand to themselves only.
    pub fn expand(&self, skill: &str) -> Vec<String> {
        let skill = normalize(skill);
        let aliases = self.entries.get(&skill).map(Vec::as_slice).unwrap_or_default();
        let mut tokens = Vec::with_capacity(aliases.len() + 1);
        tokens.push(skill);
        tokens.extend(aliases.iter().cloned());
        tokens
    }

    /// Canonical skills mentioned anywhere in `text`, sorted.
    pub fn detect_skills(&self, text: &str) -> Vec<String> {
        let text = normalize(text);
        let mut found = BTreeSet::new();
        for (skill, aliases) in &self.entries {
            let mentioned = std::iter::once(skill).chain(aliases).any(|token| {
                match word_regex(token) {
                    Ok(re) => re.is_match(&text),
                    Err(e) => {
                        warn!("Skipping unmatchable ontology token '{token}': {e}");
                        false
                    }
                }
            });
            if mentioned {
                found.insert(skill.clone());
            }
        }
        found.into_iter().collect()
    }
}
