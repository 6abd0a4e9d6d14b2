use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use motorpool_core::normalize::{normalize_records, NormalizedBatch};
use motorpool_core::repository::load_pending;
use motorpool_core::CoreResult;
use motorpool_shared::models::events::ConflictDetectedEvent;
use motorpool_shared::{PendingReservation, ProposedRide};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::context::CheckContext;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckAvailabilityRequest {
    #[serde(default)]
    pub vehicle_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    /// Records already loaded by the client. When absent the configured
    /// source is queried.
    pub pending: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct CheckAvailabilityResponse {
    pub request_id: Uuid,
    pub vehicle_id: String,
    pub date: String,
    pub conflict: bool,
    /// False when pending reservations could not be loaded; `conflict` is
    /// then always false so the form is not blocked.
    pub determined: bool,
    pub conflicting: Option<PendingReservation>,
    pub rejected_records: usize,
    pub buffer_hours: i64,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/availability/check", post(check_availability))
}

/// POST /v1/availability/check
pub async fn check_availability(
    State(state): State<AppState>,
    Json(req): Json<CheckAvailabilityRequest>,
) -> Json<CheckAvailabilityResponse> {
    let ctx = CheckContext::new(&state.business_rules);

    let batch: CoreResult<NormalizedBatch> = match &req.pending {
        Some(records) => Ok(normalize_records(records)),
        None => load_pending(state.pending_repo.as_ref()).await,
    };

    let ride = ProposedRide {
        vehicle_id: req.vehicle_id,
        date: req.date,
        start_time: req.start_time,
        end_time: req.end_time,
    };

    let mut response = CheckAvailabilityResponse {
        request_id: ctx.request_id,
        vehicle_id: ride.vehicle_id.clone(),
        date: ride.date.clone(),
        conflict: false,
        determined: false,
        conflicting: None,
        rejected_records: 0,
        buffer_hours: ctx.buffer_hours(),
    };

    let batch = match batch {
        Ok(batch) => batch,
        Err(e) => {
            warn!(request_id = %ctx.request_id, "Availability undetermined, allowing submission: {}", e);
            return Json(response);
        }
    };

    let conflicting = ctx.checker.find_conflict(&ride, &batch.valid).cloned();
    if conflicting.is_some() {
        let event = ConflictDetectedEvent::new(ctx.request_id, &ride);
        match serde_json::to_string(&event) {
            Ok(payload) => info!(request_id = %event.request_id, event = %payload, "Vehicle held by a pending reservation"),
            Err(e) => warn!(request_id = %event.request_id, "Failed to serialize conflict event: {}", e),
        }
    } else {
        debug!(request_id = %ctx.request_id, vehicle_id = %ride.vehicle_id, "Vehicle available");
    }

    response.conflict = conflicting.is_some();
    response.determined = true;
    response.conflicting = conflicting;
    response.rejected_records = batch.rejected.len();
    Json(response)
}
