use motorpool_shared::{PendingReservation, ProposedRide};

use crate::calendar::normalize_date;
use crate::clock::{add_hours, intervals_overlap};

/// Slack appended after a pending reservation's end time for the vehicle to
/// come back.
pub const RETURN_BUFFER_HOURS: i64 = 2;

/// Decides whether a proposed ride collides with reservations still awaiting
/// approval.
///
/// The check is advisory: blank or malformed input never produces an error,
/// it only makes a conflict less (or more) likely to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityChecker {
    buffer_hours: i64,
}

impl Default for AvailabilityChecker {
    fn default() -> Self {
        Self::new(RETURN_BUFFER_HOURS)
    }
}

impl AvailabilityChecker {
    pub fn new(buffer_hours: i64) -> Self {
        Self { buffer_hours }
    }

    pub fn buffer_hours(&self) -> i64 {
        self.buffer_hours
    }

    /// First pending reservation that makes the ride's vehicle unavailable.
    pub fn find_conflict<'a>(
        &self,
        ride: &ProposedRide,
        pending: &'a [PendingReservation],
    ) -> Option<&'a PendingReservation> {
        let vehicle_id = ride.vehicle_id.trim();
        if vehicle_id.is_empty()
            || ride.date.trim().is_empty()
            || ride.start_time.trim().is_empty()
            || ride.end_time.trim().is_empty()
        {
            return None;
        }

        let date = normalize_date(&ride.date);

        pending.iter().find(|entry| {
            entry.vehicle_id.trim() == vehicle_id
                && normalize_date(&entry.date) == date
                && self.blocks(ride, entry)
        })
    }

    pub fn is_vehicle_pending(&self, ride: &ProposedRide, pending: &[PendingReservation]) -> bool {
        self.find_conflict(ride, pending).is_some()
    }

    /// Entry already known to be for the same vehicle and day.
    fn blocks(&self, ride: &ProposedRide, entry: &PendingReservation) -> bool {
        match entry.time_window() {
            // Unknown hours hold the vehicle for the whole day.
            None => true,
            Some((start, end)) => intervals_overlap(
                &ride.start_time,
                &ride.end_time,
                start,
                &add_hours(end, self.buffer_hours),
            ),
        }
    }
}

/// Whether `vehicle_id` is held by a pending reservation during the given
/// window, using the standard return buffer.
pub fn is_vehicle_pending_for_ride(
    vehicle_id: &str,
    date: &str,
    start_time: &str,
    end_time: &str,
    pending: &[PendingReservation],
) -> bool {
    let ride = ProposedRide {
        vehicle_id: vehicle_id.to_string(),
        date: date.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
    };
    AvailabilityChecker::default().is_vehicle_pending(&ride, pending)
}
