//! Check history snapshots.

use super::{Checklist, ChecklistId, HistoryId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Immutable record of one completed checklist run.
///
/// `forgotten_items` holds item *names*, not identifiers, so entries remain
/// readable after the item is renamed or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckHistory {
    /// Entry identifier.
    pub id: HistoryId,
    /// Checklist the run was made against.
    pub checklist_id: ChecklistId,
    /// Checklist name at completion time.
    pub checklist_name: String,
    /// Completion timestamp.
    pub date: DateTime<Utc>,
    /// Number of items in the checklist.
    pub total_items: u32,
    /// Number of checked items.
    pub checked_items: u32,
    /// Names of items left unchecked.
    pub forgotten_items: Vec<String>,
}

impl CheckHistory {
    /// Snapshots the current run through `checklist`.
    #[must_use]
    pub fn from_checklist(checklist: &Checklist, clock: &impl Clock) -> Self {
        let progress = checklist.progress();
        Self {
            id: HistoryId::new(),
            checklist_id: checklist.id.clone(),
            checklist_name: checklist.name.clone(),
            date: clock.utc(),
            total_items: saturating_u32(progress.total),
            checked_items: saturating_u32(progress.checked),
            forgotten_items: checklist.unchecked_item_names(),
        }
    }

    /// Returns `true` when nothing was forgotten.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.forgotten_items.is_empty()
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
