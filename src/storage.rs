//! Durable storage for the event collection.
//!
//! The store knows nothing about persistence; it exposes change
//! notifications and this module consumes them. Everything lives under a
//! single fixed key, mirroring the one-blob shape the calendar keeps in
//! the browser's local storage.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::error::{CalendarError, CalendarResult};
use crate::event::CalendarEvent;
use crate::store::EventStore;

/// Storage key the event collection is saved under.
pub const STORAGE_KEY: &str = "calendar_events";

/// Load/save contract between the store and its durable backing.
pub trait EventStorage {
    /// Read the saved collection. `Ok(None)` when nothing has been saved
    /// yet; errors for unreadable or malformed data.
    fn load(&self) -> CalendarResult<Option<Vec<CalendarEvent>>>;

    /// Write the full collection, replacing any previous save.
    fn save(&self, events: &[CalendarEvent]) -> CalendarResult<()>;
}

/// JSON-file storage: one `<STORAGE_KEY>.json` file in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStorage { dir: dir.into() }
    }

    /// Platform data directory for the calendar, falling back to the
    /// working directory when the platform reports none.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("monthcal"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn file_path(&self) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY}.json"))
    }
}

impl EventStorage for JsonFileStorage {
    fn load(&self) -> CalendarResult<Option<Vec<CalendarEvent>>> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let events: Vec<CalendarEvent> = serde_json::from_str(&content)
            .map_err(|e| CalendarError::Serialization(e.to_string()))?;
        Ok(Some(events))
    }

    fn save(&self, events: &[CalendarEvent]) -> CalendarResult<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.file_path();
        let temp = path.with_extension("json.tmp");

        let content = serde_json::to_string(events)
            .map_err(|e| CalendarError::Serialization(e.to_string()))?;

        fs::write(&temp, content)?;
        fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// Read the saved collection, treating malformed data as absent.
///
/// Read and parse failures degrade to an empty collection; they are
/// logged, never fatal.
pub fn load_or_default(storage: &dyn EventStorage) -> Vec<CalendarEvent> {
    match storage.load() {
        Ok(Some(events)) => events,
        Ok(None) => Vec::new(),
        Err(err) => {
            warn!("ignoring unreadable saved events: {err}");
            Vec::new()
        }
    }
}

/// Populate `store` from `storage` on initial mount. A missing or
/// malformed save leaves the store as it is.
pub fn hydrate(store: &mut EventStore, storage: &dyn EventStorage) {
    let events = load_or_default(storage);
    if !events.is_empty() {
        store.set_events(events);
    }
}

/// Subscribe `storage` to the store's change notifications: after every
/// collection change that leaves it non-empty, the full collection is
/// written back. Save failures are logged and swallowed; the in-memory
/// state stays authoritative.
pub fn attach_autosave(store: &mut EventStore, storage: impl EventStorage + 'static) {
    store.on_change(move |events| {
        if events.is_empty() {
            return;
        }
        if let Err(err) = storage.save(events) {
            warn!("failed to save events: {err}");
        }
    });
}
