use chrono::NaiveDate;

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Formats the backend and the request forms have been seen to send.
const ACCEPTED_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%Y/%m/%d"];

/// Parses a calendar date in any accepted format. ISO date-times are reduced
/// to their date part.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    let parsed = ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok());
    if parsed.is_some() {
        return parsed;
    }

    // "2025-06-01T08:00:00Z", "2025-06-01 08:00"
    match (raw.get(..10), raw.get(10..11)) {
        (Some(date_part), Some("T" | " ")) => {
            NaiveDate::parse_from_str(date_part, CANONICAL_FORMAT).ok()
        }
        _ => None,
    }
}

/// Canonical `YYYY-MM-DD` form of a date, or the trimmed input when it does
/// not parse.
pub fn normalize_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(CANONICAL_FORMAT).to_string(),
        None => raw.trim().to_string(),
    }
}
