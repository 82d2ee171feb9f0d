//! Error handling logic

use thiserror::Error;

/// Failures reported by tour components.
///
/// Every variant describes a request that was rejected *without* changing
/// any state. Callers driving the UI are expected to log and drop these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// A section id that is not part of the fixed tour order.
    #[error("Unknown section: {id}")]
    UnknownSection {
        /// The id that failed to resolve.
        id: String,
    },

    /// A gate slot outside the circuit grid.
    #[error("Invalid slot (lane {lane}, position {position}): {message}")]
    InvalidSlot {
        /// Lane index the caller asked for.
        lane: usize,
        /// Slot position the caller asked for.
        position: usize,
        /// InvalidSlot failure message
        message: String,
    },

    /// A symbol or id that does not name anything the widget knows about.
    #[error("Unrecognized {kind}: {value}")]
    Unrecognized {
        /// What kind of thing was being parsed (gate, domain, ...).
        kind: &'static str,
        /// The offending raw value.
        value: String,
    },

    /// The operation is inconsistent with the current state.
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// Static data (question bank, config) failed validation or parsing.
    #[error("Invalid Configuration: {message}")]
    InvalidConfig {
        /// InvalidConfig failure message
        message: String,
    },
}

impl From<serde_json::Error> for TourError {
    fn from(err: serde_json::Error) -> Self {
        TourError::InvalidConfig { message: err.to_string() }
    }
}
