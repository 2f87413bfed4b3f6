//! Event collection and popover selection state.
//!
//! `EventStore` is the single owner of the event collection. Construct it
//! once at application start and pass it to whatever renders or mutates
//! events; nothing else holds the collection.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::event::CalendarEvent;

/// The one popover the UI may have open.
///
/// Opening any variant replaces whatever was open before, so mutual
/// exclusion falls out of the representation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PopoverState {
    #[default]
    Closed,
    /// The create-event form, targeting the day that was clicked.
    CreatingEvent { date: NaiveDate },
    /// The summary/edit view of one event, captured at open time. Edits
    /// work on this copy until saved back through `update_event`.
    ViewingEvent { event: CalendarEvent },
    /// The "+N more" listing for a day whose events overflowed the cell.
    ListingDay { date: NaiveDate },
}

type ChangeListener = Box<dyn FnMut(&[CalendarEvent])>;

/// Owner of the event collection plus the active popover.
///
/// Every collection mutation re-establishes the standing sort (all-day
/// events first, then timed events by ascending start time) and then runs
/// the registered change listeners. Popover transitions touch no events
/// and notify nobody.
pub struct EventStore {
    events: Vec<CalendarEvent>,
    popover: PopoverState,
    listeners: Vec<ChangeListener>,
}

impl Default for EventStore {
    fn default() -> Self {
        EventStore::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        EventStore {
            events: Vec::new(),
            popover: PopoverState::Closed,
            listeners: Vec::new(),
        }
    }

    /// The collection, in sorted order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn popover(&self) -> &PopoverState {
        &self.popover
    }

    /// Register a listener run after every collection change. The
    /// persistence bridge subscribes here.
    pub fn on_change(&mut self, listener: impl FnMut(&[CalendarEvent]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the whole collection (used when hydrating from storage).
    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        self.events = events;
        sort_events(&mut self.events);
        self.notify();
    }

    /// Insert an event and re-sort.
    pub fn add_event(&mut self, event: CalendarEvent) {
        self.events.push(event);
        sort_events(&mut self.events);
        self.notify();
    }

    /// Replace the event with the same id. Unknown ids are ignored and
    /// listeners are not run.
    pub fn update_event(&mut self, updated: CalendarEvent) {
        let Some(slot) = self.events.iter_mut().find(|e| e.id == updated.id) else {
            return;
        };
        *slot = updated;
        sort_events(&mut self.events);
        self.notify();
    }

    /// Remove the event with the given id, if present.
    pub fn remove_event(&mut self, id: &str) {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() != before {
            self.notify();
        }
    }

    /// Open the create-event form for a day.
    pub fn open_popover(&mut self, date: NaiveDate) {
        self.popover = PopoverState::CreatingEvent { date };
    }

    /// Close the create-event form. Other popovers are left alone.
    pub fn close_popover(&mut self) {
        if matches!(self.popover, PopoverState::CreatingEvent { .. }) {
            self.popover = PopoverState::Closed;
        }
    }

    /// Open the summary view for an event, snapshotting it as-is.
    pub fn open_event_summary(&mut self, event: CalendarEvent) {
        self.popover = PopoverState::ViewingEvent { event };
    }

    /// Close the summary view, dropping the snapshot.
    pub fn close_event_summary(&mut self) {
        if matches!(self.popover, PopoverState::ViewingEvent { .. }) {
            self.popover = PopoverState::Closed;
        }
    }

    /// Open the overflowed-events listing for a day.
    pub fn open_event_list_popover(&mut self, date: NaiveDate) {
        self.popover = PopoverState::ListingDay { date };
    }

    /// Close the overflowed-events listing.
    pub fn close_event_list_popover(&mut self) {
        if matches!(self.popover, PopoverState::ListingDay { .. }) {
            self.popover = PopoverState::Closed;
        }
    }

    /// The event snapshot held by an open summary popover.
    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        match &self.popover {
            PopoverState::ViewingEvent { event } => Some(event),
            _ => None,
        }
    }

    /// The day an open "+N more" listing is showing.
    pub fn event_list_day(&self) -> Option<NaiveDate> {
        match &self.popover {
            PopoverState::ListingDay { date } => Some(*date),
            _ => None,
        }
    }

    /// The day an open create-event form targets.
    pub fn creation_date(&self) -> Option<NaiveDate> {
        match &self.popover {
            PopoverState::CreatingEvent { date } => Some(*date),
            _ => None,
        }
    }

    fn notify(&mut self) {
        let Self {
            events, listeners, ..
        } = self;
        for listener in listeners.iter_mut() {
            listener(events.as_slice());
        }
    }
}

/// All-day events first, then timed events by ascending start time.
///
/// The sort is stable, so all-day events keep their relative order and
/// their (possibly stale) time fields never influence it.
fn sort_events(events: &mut [CalendarEvent]) {
    events.sort_by(|a, b| match (a.is_all_day, b.is_all_day) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => Ordering::Equal,
        (false, false) => a.start_time.cmp(&b.start_time),
    });
}
