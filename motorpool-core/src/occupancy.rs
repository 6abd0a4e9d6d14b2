use motorpool_shared::{Period, PendingReservation};
use serde::Serialize;

use crate::calendar::normalize_date;
use crate::clock::{add_hours, minutes_since_midnight};

/// One row of a vehicle's day on the occupancy timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupiedWindow {
    pub vehicle_id: String,
    pub date: String,
    pub period: Period,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// End time plus the return buffer.
    pub buffered_end: Option<String>,
    pub whole_day: bool,
}

/// Pending holds on `vehicle_id` for `date`, whole-day holds first, then by
/// start time.
pub fn vehicle_occupancy(
    vehicle_id: &str,
    date: &str,
    pending: &[PendingReservation],
    buffer_hours: i64,
) -> Vec<OccupiedWindow> {
    let vehicle_id = vehicle_id.trim();
    let date = normalize_date(date);

    let mut windows: Vec<OccupiedWindow> = pending
        .iter()
        .filter(|entry| entry.vehicle_id.trim() == vehicle_id && normalize_date(&entry.date) == date)
        .map(|entry| {
            let buffered_end = entry
                .time_window()
                .map(|(_, end)| add_hours(end, buffer_hours));
            OccupiedWindow {
                vehicle_id: entry.vehicle_id.clone(),
                date: date.clone(),
                period: entry.period,
                start_time: entry.start_time.clone(),
                end_time: entry.end_time.clone(),
                whole_day: buffered_end.is_none(),
                buffered_end,
            }
        })
        .collect();

    windows.sort_by_key(|window| {
        (
            !window.whole_day,
            window.start_time.as_deref().map(minutes_since_midnight).unwrap_or(0),
        )
    });
    windows
}
