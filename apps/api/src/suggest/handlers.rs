use axum::Json;

use crate::errors::AppError;
use crate::suggest::{suggest_rewrite, SuggestRequest, SuggestResponse};

/// POST /suggest
pub async fn handle_suggest(
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    if request.bullet.trim().is_empty() {
        return Err(AppError::Validation("bullet cannot be empty".to_string()));
    }
    Ok(Json(suggest_rewrite(&request.bullet)))
}
