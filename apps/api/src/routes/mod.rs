pub mod calibration;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::parsing::handlers::handle_parse_resume;
use crate::scoring::handlers::handle_score;
use crate::state::AppState;
use crate::suggest::handlers::handle_suggest;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/calibration", get(calibration::calibration_handler))
        .route("/parse-resume", post(handle_parse_resume))
        .route("/score", post(handle_score))
        .route("/suggest", post(handle_suggest))
        .layer(upload_limit)
        .with_state(state)
}
