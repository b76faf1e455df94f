//! Checklist record, reminder settings, and creation request.

use super::{ChecklistDomainError, ChecklistId, ChecklistItem, ItemId, SceneColor};
use chrono::{DateTime, NaiveTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Emoji given to custom checklists when the user does not pick one.
pub const DEFAULT_CUSTOM_EMOJI: &str = "🎒";

/// A named, coloured collection of items for one outing scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    /// Checklist identifier.
    pub id: ChecklistId,
    /// Display name.
    pub name: String,
    /// Display emoji.
    pub emoji: String,
    /// Accent colour as a `#RRGGBB` string.
    pub color: String,
    /// Items in storage order; see [`Checklist::sorted_items`] for display order.
    pub items: Vec<ChecklistItem>,
    /// `true` for user-created lists, `false` for built-in seeded lists.
    pub is_custom: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the latest item mutation.
    pub updated_at: DateTime<Utc>,
    /// Optional reminder configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderSettings>,
}

impl Checklist {
    /// Returns the item with the given identifier, if any.
    #[must_use]
    pub fn item(&self, item_id: &ItemId) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    /// Returns the first item whose name matches exactly.
    #[must_use]
    pub fn item_named(&self, name: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Returns the items in display order.
    ///
    /// The sort is stable, so items sharing an `order` value keep their
    /// storage order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&ChecklistItem> {
        let mut items: Vec<&ChecklistItem> = self.items.iter().collect();
        items.sort_by_key(|item| item.order);
        items
    }

    /// Returns the names of unchecked items in storage order.
    #[must_use]
    pub fn unchecked_item_names(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| !item.is_checked)
            .map(|item| item.name.clone())
            .collect()
    }

    /// Returns checked/total counts for the current run.
    #[must_use]
    pub fn progress(&self) -> ChecklistProgress {
        ChecklistProgress {
            checked: self.items.iter().filter(|item| item.is_checked).count(),
            total: self.items.len(),
        }
    }

    /// Returns whether the user may delete this checklist.
    #[must_use]
    pub const fn is_deletable(&self) -> bool {
        self.is_custom
    }
}

/// Progress of the current run through a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistProgress {
    /// Number of checked items.
    pub checked: usize,
    /// Number of items.
    pub total: usize,
}

impl ChecklistProgress {
    /// Returns the checked share as a whole percentage, rounded half up.
    #[must_use]
    pub fn percent(self) -> usize {
        rounded_percent(self.checked, self.total)
    }

    /// Returns `true` when every item is checked and there is at least one.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

/// Returns `part / whole` as a percentage rounded half up, or 0 for an empty
/// whole.
pub(crate) fn rounded_percent(part: usize, whole: usize) -> usize {
    part.saturating_mul(200)
        .saturating_add(whole)
        .checked_div(whole.saturating_mul(2))
        .unwrap_or(0)
}

/// Per-checklist reminder configuration.
///
/// Scheduling lives in the notification layer; the store only keeps the
/// configuration alongside the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    /// Whether the reminder is active.
    pub enabled: bool,
    /// Wall-clock time in `HH:mm` format.
    pub time: String,
    /// Weekdays, 0 (Sunday) to 6 (Saturday).
    pub days: Vec<u8>,
    /// Identifier of the scheduled platform notification, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
}

impl ReminderSettings {
    /// Creates an enabled reminder.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::InvalidReminderTime`] when `time` is
    /// not `HH:mm`, or [`ChecklistDomainError::InvalidReminderDay`] when a
    /// day is outside `0..=6`.
    pub fn new(
        time: impl Into<String>,
        days: impl IntoIterator<Item = u8>,
    ) -> Result<Self, ChecklistDomainError> {
        let time = time.into();
        if time.len() != 5 || NaiveTime::parse_from_str(&time, "%H:%M").is_err() {
            return Err(ChecklistDomainError::InvalidReminderTime(time));
        }

        let mut days: Vec<u8> = days.into_iter().collect();
        if let Some(day) = days.iter().copied().find(|day| *day > 6) {
            return Err(ChecklistDomainError::InvalidReminderDay(day));
        }
        days.sort_unstable();
        days.dedup();

        Ok(Self {
            enabled: true,
            time,
            days,
            notification_id: None,
        })
    }
}

/// Request payload for creating a custom checklist from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChecklistRequest {
    name: String,
    emoji: String,
    color: String,
    items: Vec<(String, Option<String>)>,
    reminder: Option<ReminderSettings>,
}

impl NewChecklistRequest {
    /// Creates a request with the default emoji and the custom scene colour.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: DEFAULT_CUSTOM_EMOJI.to_owned(),
            color: SceneColor::Custom.hex().to_owned(),
            items: Vec::new(),
            reminder: None,
        }
    }

    /// Sets the checklist emoji.
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Sets the checklist colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Appends an item without an emoji.
    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.items.push((name.into(), None));
        self
    }

    /// Appends an item with an emoji.
    #[must_use]
    pub fn with_item_and_emoji(mut self, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        self.items.push((name.into(), Some(emoji.into())));
        self
    }

    /// Sets the reminder configuration.
    #[must_use]
    pub fn with_reminder(mut self, reminder: ReminderSettings) -> Self {
        self.reminder = Some(reminder);
        self
    }

    /// Builds a custom checklist stamped with the clock's current time.
    ///
    /// Items are numbered in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::EmptyChecklistName`] or
    /// [`ChecklistDomainError::EmptyItemName`] when a name is blank.
    pub fn build(self, clock: &impl Clock) -> Result<Checklist, ChecklistDomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ChecklistDomainError::EmptyChecklistName);
        }

        let items = self
            .items
            .into_iter()
            .zip(0_u32..)
            .map(|((item_name, emoji), order)| {
                let item = ChecklistItem::new(item_name, order)?;
                Ok(match emoji {
                    Some(emoji) => item.with_emoji(emoji),
                    None => item,
                })
            })
            .collect::<Result<Vec<_>, ChecklistDomainError>>()?;

        let timestamp = clock.utc();
        Ok(Checklist {
            id: ChecklistId::new(),
            name: name.to_owned(),
            emoji: self.emoji,
            color: self.color,
            items,
            is_custom: true,
            created_at: timestamp,
            updated_at: timestamp,
            reminder: self.reminder,
        })
    }
}
