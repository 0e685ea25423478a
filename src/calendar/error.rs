//! Error type for the calendar core.

use std::path::PathBuf;

/// Error type for all fallible operations in the calendar core.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// A string was not a real calendar date in canonical `YYYY-MM-DD` form,
    /// or a date could not be represented.
    #[error("invalid calendar date `{input}`")]
    InvalidDate {
        /// The offending input.
        input: String,
    },

    /// A string was not a valid `HH:MM` time of day.
    #[error("invalid time of day `{input}`, expected HH:MM")]
    InvalidTime {
        /// The offending input.
        input: String,
    },

    /// A (year, month) pair outside the supported range.
    #[error("invalid month {year}-{month:02}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month, 1-based.
        month: u32,
    },

    /// Two events in one collection share an id.
    #[error("duplicate event id `{id}`")]
    DuplicateEventId {
        /// The repeated id.
        id: String,
    },

    /// An events file could not be read.
    #[error("failed to read events from {}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An events document was not valid JSON for the event schema.
    #[error("malformed events document: {0}")]
    Json(#[from] serde_json::Error),
}
