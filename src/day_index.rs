//! Derived day-to-events mapping.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};
use crate::event::CalendarEvent;

/// Group an event collection by day.
///
/// Recomputed from the store whenever the collection changes; never
/// mutated on its own. Input order is preserved within each day, so the
/// per-day lists inherit the store's sort (all-day first, then ascending
/// start time) without re-sorting here.
pub fn index_by_day(events: &[CalendarEvent]) -> BTreeMap<NaiveDate, Vec<CalendarEvent>> {
    let mut index: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();
    for event in events {
        index.entry(event.date).or_default().push(event.clone());
    }
    index
}

/// Events falling on one day, in stored order.
pub fn events_for_day(events: &[CalendarEvent], day: NaiveDate) -> Vec<CalendarEvent> {
    events.iter().filter(|e| e.date == day).cloned().collect()
}

/// Canonical string key for a day: `YYYY-MM-DD`.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a canonical day key back into a date. Fails loudly: a key that
/// does not parse is a caller bug, not something to drop on the floor.
pub fn parse_day_key(key: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("Should be a valid date")
    }

    fn event(id: &str, date: NaiveDate, start: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: id.to_string(),
            date,
            description: String::new(),
            guests: String::new(),
            color: "skyblue".to_string(),
            is_all_day: start.is_empty(),
            start_time: start.to_string(),
            end_time: String::new(),
        }
    }

    #[test]
    fn test_every_event_lands_under_its_own_day() {
        let events = vec![
            event("a", ymd(2024, 3, 1), ""),
            event("b", ymd(2024, 3, 1), "09:00"),
            event("c", ymd(2024, 3, 2), "10:00"),
            event("d", ymd(2024, 4, 15), ""),
        ];

        let index = index_by_day(&events);

        assert_eq!(index.len(), 3);
        assert_eq!(index[&ymd(2024, 3, 1)].len(), 2);
        assert_eq!(index[&ymd(2024, 3, 2)].len(), 1);
        assert_eq!(index[&ymd(2024, 4, 15)].len(), 1);

        let total: usize = index.values().map(Vec::len).sum();
        assert_eq!(total, events.len());
    }

    #[test]
    fn test_per_day_order_follows_input_order() {
        // Already sorted the way the store keeps them.
        let events = vec![
            event("allday", ymd(2024, 3, 1), ""),
            event("early", ymd(2024, 3, 1), "08:00"),
            event("late", ymd(2024, 3, 1), "09:00"),
        ];

        let index = index_by_day(&events);
        let ids: Vec<&str> = index[&ymd(2024, 3, 1)].iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["allday", "early", "late"]);
    }

    #[test]
    fn test_events_for_day_filters_one_day() {
        let events = vec![
            event("a", ymd(2024, 3, 1), "08:00"),
            event("b", ymd(2024, 3, 2), "09:00"),
        ];

        let day = events_for_day(&events, ymd(2024, 3, 2));
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].id, "b");

        assert!(events_for_day(&events, ymd(2024, 3, 3)).is_empty());
    }

    #[test]
    fn test_day_key_is_zero_padded_iso() {
        assert_eq!(day_key(ymd(2024, 3, 1)), "2024-03-01");
        assert_eq!(day_key(ymd(2024, 11, 30)), "2024-11-30");
    }

    #[test]
    fn test_day_keys_roundtrip_and_bad_keys_surface() {
        let date = ymd(2024, 3, 1);
        assert_eq!(parse_day_key(&day_key(date)).expect("Should parse"), date);

        assert!(parse_day_key("03/01/2024").is_err());
        assert!(parse_day_key("").is_err());
    }
}
