//! Error types for checklist domain validation.

use thiserror::Error;

/// Errors returned while constructing new checklist domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChecklistDomainError {
    /// The checklist name is empty after trimming.
    #[error("checklist name must not be empty")]
    EmptyChecklistName,

    /// The item name is empty after trimming.
    #[error("item name must not be empty")]
    EmptyItemName,

    /// The reminder time is not a valid `HH:mm` wall-clock time.
    #[error("invalid reminder time '{0}', expected HH:mm")]
    InvalidReminderTime(String),

    /// The reminder weekday is outside `0..=6`.
    #[error("invalid reminder weekday {0}, expected 0 (Sunday) to 6 (Saturday)")]
    InvalidReminderDay(u8),
}
