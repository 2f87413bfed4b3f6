//! Wall-clock helpers for "HH:MM" time strings.
//!
//! Times stay zero-padded 24-hour strings throughout the crate so that
//! lexicographic order equals chronological order.

use chrono::{Local, NaiveDate, NaiveTime};

use crate::error::{CalendarError, CalendarResult};

/// Parse a zero-padded 24-hour "HH:MM" string.
pub fn parse_hhmm(time: &str) -> CalendarResult<NaiveTime> {
    // %H accepts single digits, which would break the string-sort
    // invariant, so the padded length is checked explicitly.
    if time.len() != 5 {
        return Err(CalendarError::InvalidTime(time.to_string()));
    }
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| CalendarError::InvalidTime(time.to_string()))
}

/// Format an "HH:MM" string for display as 12-hour time ("2:30 PM").
/// Empty or unparseable input yields an empty string.
pub fn format_time_12h(time: &str) -> String {
    match parse_hhmm(time) {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => String::new(),
    }
}

/// Whether `date` is today, per the local clock.
pub fn is_current_day(date: NaiveDate) -> bool {
    date == Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm_accepts_padded_times() {
        let parsed = parse_hhmm("09:30").expect("Should parse");
        assert_eq!(parsed, NaiveTime::from_hms_opt(9, 30, 0).expect("Should be a valid time"));
    }

    #[test]
    fn test_parse_hhmm_rejects_unpadded_and_garbage() {
        assert!(parse_hhmm("9:30").is_err());
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("09:61").is_err());
        assert!(parse_hhmm("").is_err());
        assert!(parse_hhmm("soon").is_err());
    }

    #[test]
    fn test_format_time_12h() {
        assert_eq!(format_time_12h("14:30"), "2:30 PM");
        assert_eq!(format_time_12h("09:05"), "9:05 AM");
        assert_eq!(format_time_12h("00:00"), "12:00 AM");
        assert_eq!(format_time_12h("12:00"), "12:00 PM");
    }

    #[test]
    fn test_format_time_12h_empty_for_invalid_input() {
        assert_eq!(format_time_12h(""), "");
        assert_eq!(format_time_12h("later"), "");
    }
}
