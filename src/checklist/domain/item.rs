//! Checklist item value type.

use super::{ChecklistDomainError, ItemId};
use serde::{Deserialize, Serialize};

/// A single trackable object within a checklist.
///
/// Items are plain records: the reducer replaces them wholesale on update,
/// so fields are public. Use [`ChecklistItem::new`] when building an item
/// from user input so the name is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Item identifier, unique within its checklist.
    pub id: ItemId,
    /// Display name; also the key recorded in check history.
    pub name: String,
    /// Optional display emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Whether the item is ticked in the current run.
    pub is_checked: bool,
    /// Display position within the checklist.
    pub order: u32,
    /// Number of completed runs in which the item was left unchecked.
    pub forgot_count: u32,
    /// Number of times the item went from unchecked to checked.
    pub checked_count: u32,
}

impl ChecklistItem {
    /// Creates an unchecked item with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::EmptyItemName`] when the name is empty
    /// after trimming.
    pub fn new(name: impl Into<String>, order: u32) -> Result<Self, ChecklistDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChecklistDomainError::EmptyItemName);
        }

        Ok(Self {
            id: ItemId::new(),
            name: trimmed.to_owned(),
            emoji: None,
            is_checked: false,
            order,
            forgot_count: 0,
            checked_count: 0,
        })
    }

    /// Sets the display emoji.
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Overrides the generated identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns a copy with the checked flag flipped.
    ///
    /// `checked_count` only grows on the unchecked → checked edge.
    #[must_use]
    pub fn toggled(&self) -> Self {
        let is_checked = !self.is_checked;
        Self {
            is_checked,
            checked_count: if is_checked {
                self.checked_count.saturating_add(1)
            } else {
                self.checked_count
            },
            ..self.clone()
        }
    }

    /// Returns a copy with the checked flag cleared and counters untouched.
    #[must_use]
    pub fn unchecked(&self) -> Self {
        Self {
            is_checked: false,
            ..self.clone()
        }
    }

    /// Returns a copy with one more forgotten run recorded.
    #[must_use]
    pub fn with_forgotten_recorded(&self) -> Self {
        Self {
            forgot_count: self.forgot_count.saturating_add(1),
            ..self.clone()
        }
    }
}
