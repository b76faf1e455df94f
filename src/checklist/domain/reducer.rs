//! Pure state transition function.
//!
//! Every transition builds a new [`AppState`] from the previous one; the
//! input is only ever borrowed. Actions that reference a missing checklist or
//! item are identity transitions.

use super::{
    Action, AppState, CheckHistory, Checklist, ChecklistId, ChecklistItem, HISTORY_LIMIT, ItemId,
};
use chrono::{DateTime, Utc};

/// Applies `action` to `state`, returning the next state.
///
/// `now` stamps `updated_at` on checklists whose items change.
#[must_use]
pub fn transition(state: &AppState, action: Action, now: DateTime<Utc>) -> AppState {
    apply(state, action, now).unwrap_or_else(|| state.clone())
}

/// Applies `action` to `state`, returning `None` for identity transitions.
#[must_use]
pub fn apply(state: &AppState, action: Action, now: DateTime<Utc>) -> Option<AppState> {
    match action {
        Action::LoadData(next) => Some(*next),
        Action::AddChecklist(checklist) => {
            let checklists = state
                .checklists
                .iter()
                .cloned()
                .chain(std::iter::once(checklist))
                .collect();
            Some(with_checklists(state, checklists))
        }
        Action::UpdateChecklist(checklist) => {
            map_checklists(state, &checklist.id, |_| Some(checklist.clone()))
        }
        Action::DeleteChecklist(checklist_id) => delete_checklist(state, &checklist_id),
        Action::ToggleItem {
            checklist_id,
            item_id,
        } => map_checklists(state, &checklist_id, |checklist| {
            let items = map_items(&checklist.items, &item_id, ChecklistItem::toggled)?;
            Some(rebuild(checklist, items, checklist.updated_at))
        }),
        Action::ResetChecklist(checklist_id) => {
            map_checklists(state, &checklist_id, |checklist| {
                let items = checklist.items.iter().map(ChecklistItem::unchecked).collect();
                Some(rebuild(checklist, items, checklist.updated_at))
            })
        }
        Action::AddItem { checklist_id, item } => {
            map_checklists(state, &checklist_id, |checklist| {
                let items = checklist
                    .items
                    .iter()
                    .cloned()
                    .chain(std::iter::once(item.clone()))
                    .collect();
                Some(rebuild(checklist, items, now))
            })
        }
        Action::UpdateItem { checklist_id, item } => {
            map_checklists(state, &checklist_id, |checklist| {
                let items = map_items(&checklist.items, &item.id, |_| item.clone())?;
                Some(rebuild(checklist, items, now))
            })
        }
        Action::DeleteItem {
            checklist_id,
            item_id,
        } => map_checklists(state, &checklist_id, |checklist| {
            if checklist.item(&item_id).is_none() {
                return None;
            }
            let items = checklist
                .items
                .iter()
                .filter(|item| item.id != item_id)
                .cloned()
                .collect();
            Some(rebuild(checklist, items, now))
        }),
        Action::ReorderItems {
            checklist_id,
            items,
        } => map_checklists(state, &checklist_id, |checklist| {
            Some(rebuild(checklist, items.clone(), now))
        }),
        Action::SaveCheckHistory(entry) => Some(prepend_history(state, entry)),
        Action::UpdateSettings(patch) => Some(AppState {
            checklists: state.checklists.clone(),
            history: state.history.clone(),
            settings: state.settings.merged(&patch),
        }),
        Action::RecordForgottenItem {
            checklist_id,
            item_id,
        } => map_checklists(state, &checklist_id, |checklist| {
            let items = map_items(
                &checklist.items,
                &item_id,
                ChecklistItem::with_forgotten_recorded,
            )?;
            Some(rebuild(checklist, items, checklist.updated_at))
        }),
        Action::Unrecognized => None,
    }
}

fn with_checklists(state: &AppState, checklists: Vec<Checklist>) -> AppState {
    AppState {
        checklists,
        history: state.history.clone(),
        settings: state.settings.clone(),
    }
}

/// Rewrites every checklist with the given id through `update`.
///
/// Returns `None` when no checklist matched or `update` declined every match.
fn map_checklists<F>(state: &AppState, checklist_id: &ChecklistId, update: F) -> Option<AppState>
where
    F: Fn(&Checklist) -> Option<Checklist>,
{
    let mut changed = false;
    let checklists = state
        .checklists
        .iter()
        .map(|checklist| {
            if &checklist.id == checklist_id
                && let Some(next) = update(checklist)
            {
                changed = true;
                return next;
            }
            checklist.clone()
        })
        .collect();

    changed.then(|| with_checklists(state, checklists))
}

/// Rewrites every item with the given id through `update`.
///
/// Returns `None` when no item matched.
fn map_items<F>(items: &[ChecklistItem], item_id: &ItemId, update: F) -> Option<Vec<ChecklistItem>>
where
    F: Fn(&ChecklistItem) -> ChecklistItem,
{
    if !items.iter().any(|item| &item.id == item_id) {
        return None;
    }

    Some(
        items
            .iter()
            .map(|item| {
                if &item.id == item_id {
                    update(item)
                } else {
                    item.clone()
                }
            })
            .collect(),
    )
}

fn rebuild(checklist: &Checklist, items: Vec<ChecklistItem>, updated_at: DateTime<Utc>) -> Checklist {
    Checklist {
        id: checklist.id.clone(),
        name: checklist.name.clone(),
        emoji: checklist.emoji.clone(),
        color: checklist.color.clone(),
        items,
        is_custom: checklist.is_custom,
        created_at: checklist.created_at,
        updated_at,
        reminder: checklist.reminder.clone(),
    }
}

fn delete_checklist(state: &AppState, checklist_id: &ChecklistId) -> Option<AppState> {
    if state.checklist(checklist_id).is_none() {
        return None;
    }

    let checklists = state
        .checklists
        .iter()
        .filter(|checklist| &checklist.id != checklist_id)
        .cloned()
        .collect();
    Some(with_checklists(state, checklists))
}

fn prepend_history(state: &AppState, entry: CheckHistory) -> AppState {
    let history = std::iter::once(entry)
        .chain(state.history.iter().cloned())
        .take(HISTORY_LIMIT)
        .collect();

    AppState {
        checklists: state.checklists.clone(),
        history,
        settings: state.settings.clone(),
    }
}
