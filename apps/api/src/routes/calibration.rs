use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Calibration metadata. Static until a labelled pair dataset exists.
#[derive(Debug, Serialize)]
pub struct CalibrationResponse {
    pub dataset_stats: Value,
    pub p_at_k: f64,
    pub recall: f64,
    pub version: String,
}

/// GET /calibration
pub async fn calibration_handler() -> Json<CalibrationResponse> {
    Json(CalibrationResponse {
        dataset_stats: json!({ "pairs": 0, "niche": "SWE early-career (IN)" }),
        p_at_k: 0.0,
        recall: 0.0,
        version: "v0".to_string(),
    })
}
