//! Wall-clock arithmetic on `"HH:MM"` strings.
//!
//! Times carry no date and no offset. Anything that does not parse counts as
//! midnight, so a malformed value can never abort a form submission.

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes elapsed since 00:00, or 0 for empty or malformed input.
pub fn minutes_since_midnight(time: &str) -> i64 {
    parse_clock(time).unwrap_or(0)
}

fn parse_clock(time: &str) -> Option<i64> {
    let mut parts = time.trim().split(':');
    let hours: i64 = parts.next()?.trim().parse().ok()?;
    let minutes: i64 = parts.next()?.trim().parse().ok()?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Adds whole hours to a wall-clock time, wrapping past midnight.
pub fn add_hours(time: &str, hours: i64) -> String {
    let hours = hours.rem_euclid(24);
    let total = (minutes_since_midnight(time) + hours * 60).rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Minute span of an interval; an end before its start rolls over one day.
fn span(start: &str, end: &str) -> (i64, i64) {
    let start = minutes_since_midnight(start);
    let mut end = minutes_since_midnight(end);
    if end < start {
        end += MINUTES_PER_DAY;
    }
    (start, end)
}

/// Strict overlap test between two wall-clock intervals.
///
/// Intervals that only touch at an endpoint do not overlap. Interval B is also
/// tried one day earlier and one day later, so the early-morning part of an
/// interval that crosses midnight is compared against the right day.
pub fn intervals_overlap(start_a: &str, end_a: &str, start_b: &str, end_b: &str) -> bool {
    let (a_start, a_end) = span(start_a, end_a);
    let (b_start, b_end) = span(start_b, end_b);

    [-MINUTES_PER_DAY, 0, MINUTES_PER_DAY]
        .iter()
        .any(|shift| a_start < b_end + shift && b_start + shift < a_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_since_midnight_bounds() {
        assert_eq!(minutes_since_midnight("00:00"), 0);
        assert_eq!(minutes_since_midnight("23:59"), 1439);
        assert_eq!(minutes_since_midnight("08:30"), 510);
        assert_eq!(minutes_since_midnight("7:05"), 425);
        assert_eq!(minutes_since_midnight("14:15:00"), 855);
    }

    #[test]
    fn test_minutes_since_midnight_fails_open() {
        assert_eq!(minutes_since_midnight(""), 0);
        assert_eq!(minutes_since_midnight("noon"), 0);
        assert_eq!(minutes_since_midnight("12"), 0);
        assert_eq!(minutes_since_midnight("25:00"), 0);
        assert_eq!(minutes_since_midnight("10:75"), 0);
        assert_eq!(minutes_since_midnight("-1:30"), 0);
    }

    #[test]
    fn test_minutes_since_midnight_is_monotonic() {
        let mut previous = -1;
        for hour in 0..24 {
            for minute in 0..60 {
                let current = minutes_since_midnight(&format!("{:02}:{:02}", hour, minute));
                assert!(current > previous);
                previous = current;
            }
        }
    }

    #[test]
    fn test_add_hours_wraps_at_midnight() {
        assert_eq!(add_hours("23:30", 2), "01:30");
        assert_eq!(add_hours("08:30", 2), "10:30");
        assert_eq!(add_hours("22:00", 2), "00:00");
        assert_eq!(add_hours("01:00", -2), "23:00");
        assert_eq!(add_hours("garbage", 2), "02:00");
    }

    #[test]
    fn test_add_hours_with_extreme_offsets() {
        assert_eq!(add_hours("08:00", i64::MAX / 10), add_hours("08:00", (i64::MAX / 10) % 24));
        assert_eq!(add_hours("08:00", i64::MIN), add_hours("08:00", i64::MIN.rem_euclid(24)));
        assert_eq!(add_hours("08:30", 24), "08:30");
        assert_eq!(add_hours("08:30", 26), "10:30");
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        assert!(!intervals_overlap("09:00", "10:00", "10:00", "11:00"));
        assert!(!intervals_overlap("10:00", "11:00", "09:00", "10:00"));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        assert!(intervals_overlap("09:00", "11:00", "10:00", "10:30"));
        assert!(intervals_overlap("10:00", "10:30", "09:00", "11:00"));
    }

    #[test]
    fn test_midnight_crossing_overlap() {
        assert!(intervals_overlap("23:00", "01:00", "00:30", "02:00"));
        assert!(intervals_overlap("00:30", "02:00", "23:00", "01:00"));
        assert!(intervals_overlap("22:00", "02:00", "23:00", "23:30"));
        assert!(!intervals_overlap("23:00", "01:00", "01:00", "03:00"));
        assert!(!intervals_overlap("23:00", "01:00", "12:00", "13:00"));
    }

    #[test]
    fn test_disjoint_intervals() {
        assert!(!intervals_overlap("06:00", "07:00", "18:00", "19:00"));
    }
}
