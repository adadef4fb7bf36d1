//! Axum route handlers for resume parsing, plus the multipart reader shared
//! with the score endpoint.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ParsedResume;
use crate::parsing::parse_resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Multipart form fields accepted by the parse and score endpoints.
#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Bytes,
    pub job_json: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    #[serde(flatten)]
    pub parsed: ParsedResume,
    /// Ontology skills mentioned anywhere in the resume.
    pub detected_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /parse-resume
///
/// Multipart field `file`. Returns the parsed resume as the scoring engine sees it.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let parsed = parse_document(&state, upload.filename, upload.bytes).await?;
    let detected_skills = state.ontology.detect_skills(&parsed.ats_view_text);

    Ok(Json(ParseResumeResponse {
        parsed,
        detected_skills,
    }))
}

/// Runs extraction + segmentation on the blocking pool.
pub async fn parse_document(
    state: &AppState,
    filename: String,
    bytes: Bytes,
) -> Result<ParsedResume, AppError> {
    let names = state.name_extractor.clone();
    let parsed = tokio::task::spawn_blocking(move || {
        parse_resume(&bytes, &filename, names.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("Resume parsing task failed: {e}")))?;

    info!(
        "Parsed resume: {} chars, {} risks, parse score {:.2}",
        parsed.ats_view_text.len(),
        parsed.risks.len(),
        parsed.parse_score
    );
    Ok(parsed)
}

/// Collects the `file` and optional `job_json` fields; other fields are ignored.
pub async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut file = None;
    let mut job_json = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                file = Some((filename, bytes));
            }
            Some("job_json") => job_json = Some(field.text().await?),
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("Missing multipart field 'file'".to_string()))?;

    Ok(ResumeUpload {
        filename,
        bytes,
        job_json,
    })
}
