//! Create/edit form validation.
//!
//! The store never validates; this boundary does. A draft that fails
//! validation never becomes a `CalendarEvent`, so the collection only
//! ever holds well-formed records.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::event::CalendarEvent;
use crate::time::parse_hhmm;

/// Unvalidated form input for creating or editing an event.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub guests: String,
    pub color: String,
    pub is_all_day: bool,
    pub start_time: String,
    pub end_time: String,
}

/// Why a draft was rejected. Surfaced to the form, never to the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Color is required")]
    MissingColor,

    #[error("Start and end times are required for timed events")]
    MissingTime,

    #[error("Invalid time '{0}'. Expected HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("End time must not be before start time")]
    EndBeforeStart,
}

impl EventDraft {
    /// Prefill a draft from an existing event, for the summary popover's
    /// edit flow.
    pub fn from_event(event: &CalendarEvent) -> Self {
        EventDraft {
            title: event.title.clone(),
            description: event.description.clone(),
            guests: event.guests.clone(),
            color: event.color.clone(),
            is_all_day: event.is_all_day,
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
        }
    }

    /// Validate and build a new event for `date`, assigning a fresh id.
    pub fn create(self, date: NaiveDate) -> Result<CalendarEvent, ValidationError> {
        self.validate()?;
        Ok(self.into_event(Uuid::new_v4().to_string(), date))
    }

    /// Validate and build a replacement for `existing`, keeping its id
    /// and date. The result goes to `EventStore::update_event`.
    pub fn apply_to(self, existing: &CalendarEvent) -> Result<CalendarEvent, ValidationError> {
        self.validate()?;
        Ok(self.into_event(existing.id.clone(), existing.date))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.color.is_empty() {
            return Err(ValidationError::MissingColor);
        }
        if !self.is_all_day {
            if self.start_time.is_empty() || self.end_time.is_empty() {
                return Err(ValidationError::MissingTime);
            }
            let start = parse_hhmm(&self.start_time)
                .map_err(|_| ValidationError::InvalidTime(self.start_time.clone()))?;
            let end = parse_hhmm(&self.end_time)
                .map_err(|_| ValidationError::InvalidTime(self.end_time.clone()))?;
            if end < start {
                return Err(ValidationError::EndBeforeStart);
            }
        }
        Ok(())
    }

    fn into_event(self, id: String, date: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title,
            date,
            description: self.description,
            guests: self.guests,
            color: self.color,
            is_all_day: self.is_all_day,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
