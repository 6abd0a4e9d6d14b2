//! Maps raw pending-reservation records onto the canonical schema.
//!
//! The backend has renamed these fields several times and old rows still carry
//! the old names. Each canonical field lists the spellings it accepts, checked
//! in order; the first present, non-empty value wins.
//!
//! | canonical    | accepted keys                        |
//! |--------------|--------------------------------------|
//! | `vehicle_id` | `vehicle_id`, `vehicleId`, `car_id`  |
//! | `date`       | `date`, `ride_date`                  |
//! | `period`     | `period`, `ride_period`              |
//! | `start_time` | `start_time`, `startTime`            |
//! | `end_time`   | `end_time`, `endTime`                |

use motorpool_shared::{Period, PendingReservation};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

pub const VEHICLE_ID_KEYS: [&str; 3] = ["vehicle_id", "vehicleId", "car_id"];
pub const DATE_KEYS: [&str; 2] = ["date", "ride_date"];
pub const PERIOD_KEYS: [&str; 2] = ["period", "ride_period"];
pub const START_TIME_KEYS: [&str; 2] = ["start_time", "startTime"];
pub const END_TIME_KEYS: [&str; 2] = ["end_time", "endTime"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid period: {0}")]
    InvalidPeriod(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Valid(PendingReservation),
    Rejected(Rejection),
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedRecord {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizedBatch {
    pub valid: Vec<PendingReservation>,
    pub rejected: Vec<RejectedRecord>,
}

/// Strings are trimmed, integers are stringified, anything else is absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

fn first_present(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| fields.get(*key).and_then(scalar_text))
}

pub fn normalize_record(record: &Value) -> Normalized {
    let Some(fields) = record.as_object() else {
        return Normalized::Rejected(Rejection::NotAnObject);
    };

    let Some(vehicle_id) = first_present(fields, &VEHICLE_ID_KEYS) else {
        return Normalized::Rejected(Rejection::MissingField("vehicle_id"));
    };
    let Some(date) = first_present(fields, &DATE_KEYS) else {
        return Normalized::Rejected(Rejection::MissingField("date"));
    };
    let Some(raw_period) = first_present(fields, &PERIOD_KEYS) else {
        return Normalized::Rejected(Rejection::MissingField("period"));
    };
    let period = match raw_period.parse::<Period>() {
        Ok(period) => period,
        Err(_) => return Normalized::Rejected(Rejection::InvalidPeriod(raw_period)),
    };

    Normalized::Valid(PendingReservation {
        vehicle_id,
        date,
        period,
        start_time: first_present(fields, &START_TIME_KEYS),
        end_time: first_present(fields, &END_TIME_KEYS),
    })
}

/// Normalizes a whole response, keeping the index of every dropped record.
pub fn normalize_records(records: &[Value]) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for (index, record) in records.iter().enumerate() {
        match normalize_record(record) {
            Normalized::Valid(pending) => batch.valid.push(pending),
            Normalized::Rejected(rejection) => {
                debug!("Dropping pending record {}: {}", index, rejection);
                batch.rejected.push(RejectedRecord {
                    index,
                    reason: rejection.to_string(),
                });
            }
        }
    }

    batch
}
