use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct ConflictDetectedEvent {
    pub request_id: Uuid,
    pub vehicle_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub checked_at: i64,
}

impl ConflictDetectedEvent {
    pub fn new(request_id: Uuid, ride: &crate::ProposedRide) -> Self {
        Self {
            request_id,
            vehicle_id: ride.vehicle_id.clone(),
            date: ride.date.clone(),
            start_time: ride.start_time.clone(),
            end_time: ride.end_time.clone(),
            checked_at: chrono::Utc::now().timestamp(),
        }
    }
}
