use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use super::binder::{bind_events_ordered, DayBinding, EventOrder};
use super::date::CalendarDate;
use super::error::CalendarError;
use super::event::Event;

const SAMPLE_EVENTS: &str = include_str!("../../data/sample_events.json");

/// Read-only event collection handed to every grid build.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Wrap an already-validated collection. Ids must be unique.
    pub fn new(events: Vec<Event>) -> Result<Self, CalendarError> {
        let mut seen = HashSet::with_capacity(events.len());
        for ev in &events {
            if !seen.insert(ev.id.as_str()) {
                return Err(CalendarError::DuplicateEventId { id: ev.id.clone() });
            }
            if !ev.ends_after_start() {
                warn!(
                    id = %ev.id,
                    start = %ev.start_time,
                    end = %ev.end_time,
                    "event does not end after it starts"
                );
            }
        }
        debug!(count = events.len(), "event store ready");
        Ok(Self { events })
    }

    /// Parse a JSON array of events.
    pub fn from_json_str(json: &str) -> Result<Self, CalendarError> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::new(events)
    }

    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let json = std::fs::read_to_string(path).map_err(|source| CalendarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        info!(path = %path.display(), count = store.len(), "loaded events");
        Ok(store)
    }

    /// The bundled demonstration events (five events in June 2025).
    pub fn sample() -> Result<Self, CalendarError> {
        Self::from_json_str(SAMPLE_EVENTS)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn binding_for(&self, date: CalendarDate, order: EventOrder) -> DayBinding<'_> {
        bind_events_ordered(date, &self.events, order)
    }
}
