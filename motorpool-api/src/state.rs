use std::sync::Arc;
use motorpool_core::repository::PendingReservationRepository;
use motorpool_store::app_config::BusinessRules;

/// Shared, read-only service state. Anything tied to a single request lives
/// in [`crate::CheckContext`] instead.
#[derive(Clone)]
pub struct AppState {
    pub pending_repo: Arc<dyn PendingReservationRepository>,
    pub business_rules: BusinessRules,
}
