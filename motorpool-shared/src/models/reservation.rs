use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Half of the day a ride request was filed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Night,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Morning => write!(f, "morning"),
            Period::Night => write!(f, "night"),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(Period::Morning),
            "night" => Ok(Period::Night),
            other => Err(format!("unknown period: {}", other)),
        }
    }
}

/// A submitted ride request that has not been approved or rejected yet and
/// provisionally holds its vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReservation {
    pub vehicle_id: String,
    pub date: String,
    pub period: Period,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl PendingReservation {
    /// Both ends known; otherwise the reservation blocks the whole day.
    pub fn time_window(&self) -> Option<(&str, &str)> {
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// The booking being validated before the request form is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedRide {
    pub vehicle_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parsing() {
        assert_eq!("Morning".parse::<Period>().unwrap(), Period::Morning);
        assert_eq!(" night ".parse::<Period>().unwrap(), Period::Night);
        assert!("evening".parse::<Period>().is_err());
    }

    #[test]
    fn test_pending_reservation_serialization() {
        let pending = PendingReservation {
            vehicle_id: "V1".to_string(),
            date: "2025-06-01".to_string(),
            period: Period::Night,
            start_time: None,
            end_time: None,
        };
        let json = serde_json::to_value(&pending).unwrap();
        assert_eq!(json["period"], "night");
        assert!(json.get("start_time").is_none());
        assert_eq!(pending.time_window(), None);
    }
}
