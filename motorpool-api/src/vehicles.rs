use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json,
    Router,
};
use motorpool_core::calendar::normalize_date;
use motorpool_core::repository::load_pending;
use motorpool_core::{require_field, vehicle_occupancy, OccupiedWindow};
use serde::{Deserialize, Serialize};

use crate::context::CheckContext;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OccupancyQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OccupancyResponse {
    pub vehicle_id: String,
    pub date: String,
    pub buffer_hours: i64,
    pub windows: Vec<OccupiedWindow>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/vehicles/{vehicle_id}/occupancy", get(vehicle_day_occupancy))
}

/// GET /v1/vehicles/{vehicle_id}/occupancy?date=YYYY-MM-DD
/// Pending holds on one vehicle for one day, for the occupancy timeline
pub async fn vehicle_day_occupancy(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
    Query(query): Query<OccupancyQuery>,
) -> Result<Json<OccupancyResponse>, AppError> {
    let date = require_field("date", query.date.as_deref().unwrap_or_default())?;
    let vehicle_id = require_field("vehicle_id", &vehicle_id)?;
    let ctx = CheckContext::new(&state.business_rules);

    let batch = load_pending(state.pending_repo.as_ref()).await?;
    let windows = vehicle_occupancy(vehicle_id, date, &batch.valid, ctx.buffer_hours());

    Ok(Json(OccupancyResponse {
        vehicle_id: vehicle_id.to_string(),
        date: normalize_date(date),
        buffer_hours: ctx.buffer_hours(),
        windows,
    }))
}
