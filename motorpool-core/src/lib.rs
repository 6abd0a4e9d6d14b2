pub mod availability;
pub mod calendar;
pub mod clock;
pub mod normalize;
pub mod occupancy;
pub mod repository;

pub use availability::{is_vehicle_pending_for_ride, AvailabilityChecker, RETURN_BUFFER_HOURS};
pub use normalize::{normalize_record, normalize_records, Normalized, NormalizedBatch, Rejection};
pub use occupancy::{vehicle_occupancy, OccupiedWindow};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Pending reservation source failed: {0}")]
    SourceError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Rejects blank values for fields a caller must supply.
pub fn require_field<'a>(name: &str, value: &'a str) -> CoreResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::ValidationError(format!("{} is required", name)));
    }
    Ok(trimmed)
}
