mod config;
mod errors;
mod models;
mod parsing;
mod routes;
mod scoring;
mod state;
mod suggest;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::parsing::pii::NoopNameExtractor;
use crate::routes::build_router;
use crate::scoring::ontology::SkillOntology;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparsable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS Simulator v{}", env!("CARGO_PKG_VERSION"));

    // Skill ontology: read-only for the life of the process
    let ontology = match &config.skill_ontology_path {
        Some(path) => {
            let ontology = SkillOntology::load(path)?;
            info!("Loaded {} skills from {}", ontology.len(), path.display());
            ontology
        }
        None => {
            let ontology = SkillOntology::builtin();
            info!("Using built-in skill ontology ({} skills)", ontology.len());
            ontology
        }
    };

    let state = AppState {
        config: config.clone(),
        ontology: Arc::new(ontology),
        name_extractor: Arc::new(NoopNameExtractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
