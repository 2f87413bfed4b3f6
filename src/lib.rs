//! Core engine for a month-view calendar.
//!
//! This crate provides the data and state a month-view UI renders:
//! - `grid` generates the 5x7 date matrix for a month
//! - `store` owns the event collection and the active popover
//! - `day_index` joins events onto grid days
//! - `layout` decides how many events fit in a day cell before "+N more"
//! - `storage` persists the collection under a fixed key
//!
//! The UI layer (forms, styling, animation, focus handling) lives
//! elsewhere and consumes these types; nothing here renders anything.

pub mod cursor;
pub mod day_index;
pub mod error;
pub mod event;
pub mod form;
pub mod grid;
pub mod layout;
pub mod storage;
pub mod store;
pub mod time;

pub use cursor::MonthCursor;
pub use day_index::{day_key, events_for_day, index_by_day, parse_day_key};
pub use error::{CalendarError, CalendarResult};
pub use event::{CalendarEvent, EVENT_COLORS};
pub use form::{EventDraft, ValidationError};
pub use grid::{GRID_COLS, GRID_ROWS, MonthGrid, current_month_grid, month_grid};
pub use layout::{
    EVENT_HEIGHT_PX, MAX_VISIBLE_EVENTS, OVERFLOW_FOOTER_PX, hidden_event_count,
    visible_event_count, visible_event_count_with,
};
pub use storage::{
    EventStorage, JsonFileStorage, STORAGE_KEY, attach_autosave, hydrate, load_or_default,
};
pub use store::{EventStore, PopoverState};
pub use time::{format_time_12h, is_current_day, parse_hhmm};
