//! Closed set of state transitions.

use super::{AppState, CheckHistory, Checklist, ChecklistId, ChecklistItem, ItemId, SettingsPatch};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

/// A state transition request.
///
/// The JSON form is `{"type": "TOGGLE_ITEM", "payload": {...}}`. Any `type`
/// outside this set decodes to [`Action::Unrecognized`] whatever its payload,
/// and the reducer treats that as the identity transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Replaces the entire state.
    LoadData(Box<AppState>),
    /// Appends a checklist.
    AddChecklist(Checklist),
    /// Replaces the checklist with the same identifier.
    UpdateChecklist(Checklist),
    /// Removes a checklist.
    DeleteChecklist(ChecklistId),
    /// Flips an item's checked flag.
    ToggleItem {
        /// Owning checklist.
        checklist_id: ChecklistId,
        /// Item to toggle.
        item_id: ItemId,
    },
    /// Unchecks every item of a checklist.
    ResetChecklist(ChecklistId),
    /// Appends an item to a checklist.
    AddItem {
        /// Owning checklist.
        checklist_id: ChecklistId,
        /// Item to append.
        item: ChecklistItem,
    },
    /// Replaces the item with the same identifier.
    UpdateItem {
        /// Owning checklist.
        checklist_id: ChecklistId,
        /// Replacement item.
        item: ChecklistItem,
    },
    /// Removes an item.
    DeleteItem {
        /// Owning checklist.
        checklist_id: ChecklistId,
        /// Item to remove.
        item_id: ItemId,
    },
    /// Replaces a checklist's full item list.
    ReorderItems {
        /// Owning checklist.
        checklist_id: ChecklistId,
        /// Complete item list carrying the desired `order` values.
        items: Vec<ChecklistItem>,
    },
    /// Prepends a history entry.
    SaveCheckHistory(CheckHistory),
    /// Merges a partial settings update.
    UpdateSettings(SettingsPatch),
    /// Increments an item's forgotten counter.
    RecordForgottenItem {
        /// Owning checklist.
        checklist_id: ChecklistId,
        /// Item that was forgotten.
        item_id: ItemId,
    },
    /// An action type this version does not know.
    Unrecognized,
}

impl Action {
    /// Returns the wire name of the action.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadData(_) => "LOAD_DATA",
            Self::AddChecklist(_) => "ADD_CHECKLIST",
            Self::UpdateChecklist(_) => "UPDATE_CHECKLIST",
            Self::DeleteChecklist(_) => "DELETE_CHECKLIST",
            Self::ToggleItem { .. } => "TOGGLE_ITEM",
            Self::ResetChecklist(_) => "RESET_CHECKLIST",
            Self::AddItem { .. } => "ADD_ITEM",
            Self::UpdateItem { .. } => "UPDATE_ITEM",
            Self::DeleteItem { .. } => "DELETE_ITEM",
            Self::ReorderItems { .. } => "REORDER_ITEMS",
            Self::SaveCheckHistory(_) => "SAVE_CHECK_HISTORY",
            Self::UpdateSettings(_) => "UPDATE_SETTINGS",
            Self::RecordForgottenItem { .. } => "RECORD_FORGOTTEN_ITEM",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

/// Wire names decoded into a concrete [`Action`].
const KNOWN_TYPES: [&str; 13] = [
    "LOAD_DATA",
    "ADD_CHECKLIST",
    "UPDATE_CHECKLIST",
    "DELETE_CHECKLIST",
    "TOGGLE_ITEM",
    "RESET_CHECKLIST",
    "ADD_ITEM",
    "UPDATE_ITEM",
    "DELETE_ITEM",
    "REORDER_ITEMS",
    "SAVE_CHECK_HISTORY",
    "UPDATE_SETTINGS",
    "RECORD_FORGOTTEN_ITEM",
];

/// Undecoded `{"type", "payload"}` envelope.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

/// Payload-carrying actions as they appear on the wire.
#[derive(Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
enum KnownAction {
    LoadData(Box<AppState>),
    AddChecklist(Checklist),
    UpdateChecklist(Checklist),
    DeleteChecklist(ChecklistId),
    ToggleItem {
        checklist_id: ChecklistId,
        item_id: ItemId,
    },
    ResetChecklist(ChecklistId),
    AddItem {
        checklist_id: ChecklistId,
        item: ChecklistItem,
    },
    UpdateItem {
        checklist_id: ChecklistId,
        item: ChecklistItem,
    },
    DeleteItem {
        checklist_id: ChecklistId,
        item_id: ItemId,
    },
    ReorderItems {
        checklist_id: ChecklistId,
        items: Vec<ChecklistItem>,
    },
    SaveCheckHistory(CheckHistory),
    UpdateSettings(SettingsPatch),
    RecordForgottenItem {
        checklist_id: ChecklistId,
        item_id: ItemId,
    },
}

impl From<KnownAction> for Action {
    fn from(known: KnownAction) -> Self {
        match known {
            KnownAction::LoadData(state) => Self::LoadData(state),
            KnownAction::AddChecklist(checklist) => Self::AddChecklist(checklist),
            KnownAction::UpdateChecklist(checklist) => Self::UpdateChecklist(checklist),
            KnownAction::DeleteChecklist(checklist_id) => Self::DeleteChecklist(checklist_id),
            KnownAction::ToggleItem {
                checklist_id,
                item_id,
            } => Self::ToggleItem {
                checklist_id,
                item_id,
            },
            KnownAction::ResetChecklist(checklist_id) => Self::ResetChecklist(checklist_id),
            KnownAction::AddItem { checklist_id, item } => Self::AddItem { checklist_id, item },
            KnownAction::UpdateItem { checklist_id, item } => {
                Self::UpdateItem { checklist_id, item }
            }
            KnownAction::DeleteItem {
                checklist_id,
                item_id,
            } => Self::DeleteItem {
                checklist_id,
                item_id,
            },
            KnownAction::ReorderItems {
                checklist_id,
                items,
            } => Self::ReorderItems {
                checklist_id,
                items,
            },
            KnownAction::SaveCheckHistory(entry) => Self::SaveCheckHistory(entry),
            KnownAction::UpdateSettings(patch) => Self::UpdateSettings(patch),
            KnownAction::RecordForgottenItem {
                checklist_id,
                item_id,
            } => Self::RecordForgottenItem {
                checklist_id,
                item_id,
            },
        }
    }
}

impl TryFrom<RawAction> for Action {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        if !KNOWN_TYPES.contains(&raw.kind.as_str()) {
            return Ok(Self::Unrecognized);
        }

        let envelope = Map::from_iter([
            ("type".to_owned(), Value::String(raw.kind)),
            ("payload".to_owned(), raw.payload),
        ]);
        serde_json::from_value::<KnownAction>(Value::Object(envelope)).map(Self::from)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawAction::deserialize(deserializer)?;
        Self::try_from(raw).map_err(de::Error::custom)
    }
}
