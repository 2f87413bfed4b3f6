//! Calendar event types.
//!
//! Events belong to exactly one day and are either all-day or timed.
//! The serde derives double as the wire format the persistence layer
//! stores: camelCase field names with the date as a `YYYY-MM-DD` string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Presentation colors the event form offers.
pub const EVENT_COLORS: [&str; 3] = ["red", "green", "skyblue"];

/// A single calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Opaque unique id, assigned at creation and never changed.
    pub id: String,
    pub title: String,
    /// The day this event occurs on. No time-of-day component.
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    /// Free text, empty when unset.
    pub description: String,
    /// Comma-separated guest list, empty when unset.
    pub guests: String,
    /// Presentation color tag. Opaque to the store.
    pub color: String,
    pub is_all_day: bool,
    /// Wall-clock start, zero-padded 24-hour "HH:MM". Ignored while
    /// `is_all_day` is set, but may still hold a stale value.
    pub start_time: String,
    /// Wall-clock end, same format and caveats as `start_time`.
    pub end_time: String,
}

/// Date (de)serialization for the persisted wire form.
///
/// Writes plain `YYYY-MM-DD`. Reads are lenient: older saves stored full
/// ISO datetimes, so anything after a `T` is dropped before parsing.
mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.split('T').next().unwrap_or(&raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> CalendarEvent {
        CalendarEvent {
            id: "evt-1".to_string(),
            title: "Standup".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("Should be a valid date"),
            description: String::new(),
            guests: String::new(),
            color: "green".to_string(),
            is_all_day: false,
            start_time: "09:00".to_string(),
            end_time: "09:15".to_string(),
        }
    }

    #[test]
    fn test_wire_shape_uses_camel_case_and_plain_date() {
        let json = serde_json::to_string(&event()).expect("Should serialize");

        assert!(json.contains("\"isAllDay\":false"), "Got: {}", json);
        assert!(json.contains("\"startTime\":\"09:00\""), "Got: {}", json);
        assert!(json.contains("\"endTime\":\"09:15\""), "Got: {}", json);
        assert!(json.contains("\"date\":\"2024-03-01\""), "Got: {}", json);
    }

    #[test]
    fn test_deserialize_accepts_iso_datetime_dates() {
        let json = r#"{
            "id": "evt-2",
            "title": "Vacation",
            "date": "2024-03-01T00:00:00.000Z",
            "description": "",
            "guests": "",
            "color": "red",
            "isAllDay": true,
            "startTime": "",
            "endTime": ""
        }"#;

        let parsed: CalendarEvent = serde_json::from_str(json).expect("Should parse");
        assert_eq!(
            parsed.date,
            NaiveDate::from_ymd_opt(2024, 3, 1).expect("Should be a valid date")
        );
    }

    #[test]
    fn test_deserialize_rejects_garbage_dates() {
        let json = r#"{
            "id": "evt-3",
            "title": "Broken",
            "date": "next tuesday",
            "description": "",
            "guests": "",
            "color": "red",
            "isAllDay": true,
            "startTime": "",
            "endTime": ""
        }"#;

        assert!(serde_json::from_str::<CalendarEvent>(json).is_err());
    }
}
