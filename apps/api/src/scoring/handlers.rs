//! Axum route handler for resume scoring.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::score::ScoreResult;
use crate::parsing::handlers::read_upload;
use crate::parsing::parse_resume;
use crate::scoring::score;
use crate::state::AppState;

/// POST /score
///
/// Multipart fields `file` and `job_json`. The job is validated before the
/// upload is decoded.
pub async fn handle_score(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScoreResult>, AppError> {
    let upload = read_upload(multipart).await?;
    let job_json = upload
        .job_json
        .as_deref()
        .ok_or_else(|| AppError::Validation("Missing multipart field 'job_json'".to_string()))?;
    let job = parse_job(job_json)?;

    let result = score_document(&state, upload.filename, upload.bytes, job).await?;
    Ok(Json(result))
}

pub fn parse_job(json: &str) -> Result<Job, AppError> {
    serde_json::from_str(json).map_err(|e| AppError::Validation(format!("Invalid job JSON: {e}")))
}

/// Parses and scores on the blocking pool.
pub async fn score_document(
    state: &AppState,
    filename: String,
    bytes: Bytes,
    job: Job,
) -> Result<ScoreResult, AppError> {
    let names = state.name_extractor.clone();
    let ontology = state.ontology.clone();
    let result = tokio::task::spawn_blocking(move || {
        let parsed = parse_resume(&bytes, &filename, names.as_ref());
        score(&parsed, &job, &ontology)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("Scoring task failed: {e}")))?;

    info!(
        "Scored resume: total {:.2}, {} hits, {} gaps",
        result.total,
        result.coverage_hits.len(),
        result.coverage_gaps.len()
    );
    Ok(result)
}
