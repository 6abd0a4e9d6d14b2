use motorpool_core::AvailabilityChecker;
use motorpool_store::app_config::BusinessRules;
use uuid::Uuid;

/// Built fresh for every request and passed down explicitly.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub request_id: Uuid,
    pub checker: AvailabilityChecker,
}

impl CheckContext {
    pub fn new(rules: &BusinessRules) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            checker: AvailabilityChecker::new(rules.return_buffer_hours),
        }
    }

    pub fn buffer_hours(&self) -> i64 {
        self.checker.buffer_hours()
    }
}
