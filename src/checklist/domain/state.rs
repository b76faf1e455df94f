//! Root aggregate holding all application data.

use super::{AppSettings, CheckHistory, Checklist, ChecklistId, default_checklists};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of history entries retained, newest first.
pub const HISTORY_LIMIT: usize = 100;

/// Single root aggregate of checklists, history, and settings.
///
/// The default value is the pre-load state: no checklists, no history, and
/// default settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// All checklists, built-in and custom.
    pub checklists: Vec<Checklist>,
    /// Completed runs, newest first, at most [`HISTORY_LIMIT`] entries.
    pub history: Vec<CheckHistory>,
    /// User preferences.
    pub settings: AppSettings,
}

impl AppState {
    /// Creates the first-launch state: the default dataset, empty history,
    /// and default settings.
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            checklists: default_checklists(now),
            history: Vec::new(),
            settings: AppSettings::default(),
        }
    }

    /// Returns the checklist with the given identifier, if any.
    #[must_use]
    pub fn checklist(&self, id: &ChecklistId) -> Option<&Checklist> {
        self.checklists.iter().find(|checklist| &checklist.id == id)
    }

    /// Returns the state with checklists restored to the default dataset and
    /// history cleared. Settings are kept.
    #[must_use]
    pub fn with_default_checklists(&self, now: DateTime<Utc>) -> Self {
        Self {
            checklists: default_checklists(now),
            history: Vec::new(),
            settings: self.settings.clone(),
        }
    }

    /// Returns the state with history cleared.
    #[must_use]
    pub fn without_history(&self) -> Self {
        Self {
            checklists: self.checklists.clone(),
            history: Vec::new(),
            settings: self.settings.clone(),
        }
    }
}
