use std::sync::Arc;

use crate::config::Config;
use crate::parsing::pii::NameExtractor;
use crate::scoring::ontology::SkillOntology;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only skill ontology, built once at startup.
    pub ontology: Arc<SkillOntology>,
    /// Pluggable name detection. Default: NoopNameExtractor.
    pub name_extractor: Arc<dyn NameExtractor>,
}

#[cfg(test)]
pub fn test_state() -> AppState {
    AppState {
        config: Config::default(),
        ontology: Arc::new(SkillOntology::builtin()),
        name_extractor: Arc::new(crate::parsing::pii::NoopNameExtractor),
    }
}
