use axum::{extract::Json, routing::post, Router};
use motorpool_core::normalize::{normalize_records, NormalizedBatch};
use serde_json::Value;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/pending/normalize", post(normalize_pending))
}

/// POST /v1/pending/normalize
/// Shows how raw backend records map onto the canonical schema
pub async fn normalize_pending(Json(records): Json<Vec<Value>>) -> Json<NormalizedBatch> {
    Json(normalize_records(&records))
}
