//! Read/write views over a [`ChecklistStore`].
//!
//! Selectors borrow the store mutably for their lifetime and translate
//! intent-level calls into [`Action`] dispatches, so presentation code never
//! builds actions itself. Every write returns whether the state changed.

use crate::checklist::{
    domain::{
        Action, AppSettings, CheckHistory, Checklist, ChecklistDomainError, ChecklistId,
        ChecklistItem, ItemId, NewChecklistRequest, SettingsPatch,
    },
    ports::KeyValueStorage,
    services::ChecklistStore,
};
use mockable::Clock;

/// Direction for [`ChecklistSelector::move_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Towards the start of the list.
    Up,
    /// Towards the end of the list.
    Down,
}

impl<S, C> ChecklistStore<S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Returns the list-level selector.
    pub fn checklists(&mut self) -> ChecklistsSelector<'_, S, C> {
        ChecklistsSelector { store: self }
    }

    /// Returns a selector bound to one checklist id.
    ///
    /// The selector exists whether or not the checklist does;
    /// [`ChecklistSelector::get`] returns `None` for unknown ids and writes
    /// through it are identity transitions.
    pub fn checklist(&mut self, id: impl Into<ChecklistId>) -> ChecklistSelector<'_, S, C> {
        ChecklistSelector {
            store: self,
            id: id.into(),
        }
    }

    /// Returns the history selector.
    pub fn history(&mut self) -> HistorySelector<'_, S, C> {
        HistorySelector { store: self }
    }

    /// Returns the settings selector.
    pub fn settings(&mut self) -> SettingsSelector<'_, S, C> {
        SettingsSelector { store: self }
    }
}

/// List-level checklist operations.
pub struct ChecklistsSelector<'a, S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    store: &'a mut ChecklistStore<S, C>,
}

impl<S, C> ChecklistsSelector<'_, S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Returns every checklist in storage order.
    #[must_use]
    pub fn all(&self) -> &[Checklist] {
        &self.store.state().checklists
    }

    /// Returns the seeded checklists.
    #[must_use]
    pub fn built_in(&self) -> impl Iterator<Item = &Checklist> {
        self.all().iter().filter(|checklist| !checklist.is_custom)
    }

    /// Returns the user-created checklists.
    #[must_use]
    pub fn custom(&self) -> impl Iterator<Item = &Checklist> {
        self.all().iter().filter(|checklist| checklist.is_custom)
    }

    /// Appends a checklist.
    pub fn add(&mut self, checklist: Checklist) -> bool {
        self.store.dispatch(Action::AddChecklist(checklist))
    }

    /// Builds a custom checklist from `request` and appends it.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError`] when the request is invalid; the state
    /// is left untouched.
    pub fn create(
        &mut self,
        request: NewChecklistRequest,
    ) -> Result<ChecklistId, ChecklistDomainError> {
        let checklist = request.build(self.store.clock())?;
        let id = checklist.id.clone();
        self.store.dispatch(Action::AddChecklist(checklist));
        Ok(id)
    }

    /// Replaces the checklist with the same id.
    pub fn update(&mut self, checklist: Checklist) -> bool {
        self.store.dispatch(Action::UpdateChecklist(checklist))
    }

    /// Removes a checklist.
    pub fn delete(&mut self, id: impl Into<ChecklistId>) -> bool {
        self.store.dispatch(Action::DeleteChecklist(id.into()))
    }

    /// Restores the default dataset and clears history, keeping settings.
    pub fn reset_to_defaults(&mut self) -> bool {
        let next = self
            .store
            .state()
            .with_default_checklists(self.store.clock().utc());
        self.store.dispatch(Action::LoadData(Box::new(next)))
    }
}

/// Operations bound to a single checklist id.
pub struct ChecklistSelector<'a, S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    store: &'a mut ChecklistStore<S, C>,
    id: ChecklistId,
}

impl<S, C> ChecklistSelector<'_, S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Returns the bound id.
    #[must_use]
    pub const fn id(&self) -> &ChecklistId {
        &self.id
    }

    /// Returns the checklist, or `None` when the id is unknown.
    #[must_use]
    pub fn get(&self) -> Option<&Checklist> {
        self.store.state().checklist(&self.id)
    }

    /// Flips an item's checked flag.
    pub fn toggle_item(&mut self, item_id: impl Into<ItemId>) -> bool {
        let action = Action::ToggleItem {
            checklist_id: self.id.clone(),
            item_id: item_id.into(),
        };
        self.store.dispatch(action)
    }

    /// Unchecks every item.
    pub fn reset(&mut self) -> bool {
        self.store.dispatch(Action::ResetChecklist(self.id.clone()))
    }

    /// Appends an item.
    pub fn add_item(&mut self, item: ChecklistItem) -> bool {
        let action = Action::AddItem {
            checklist_id: self.id.clone(),
            item,
        };
        self.store.dispatch(action)
    }

    /// Builds an item from user input and appends it at the end.
    ///
    /// Returns the new item's id, or `None` when the checklist is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::EmptyItemName`] for a blank name.
    pub fn add_new_item(
        &mut self,
        name: impl Into<String>,
        emoji: Option<String>,
    ) -> Result<Option<ItemId>, ChecklistDomainError> {
        let Some(order) = self
            .get()
            .map(|checklist| u32::try_from(checklist.items.len()).unwrap_or(u32::MAX))
        else {
            return Ok(None);
        };

        let mut item = ChecklistItem::new(name, order)?;
        item.emoji = emoji;
        let item_id = item.id.clone();
        self.add_item(item);
        Ok(Some(item_id))
    }

    /// Replaces the item with the same id.
    pub fn update_item(&mut self, item: ChecklistItem) -> bool {
        let action = Action::UpdateItem {
            checklist_id: self.id.clone(),
            item,
        };
        self.store.dispatch(action)
    }

    /// Removes an item.
    pub fn delete_item(&mut self, item_id: impl Into<ItemId>) -> bool {
        let action = Action::DeleteItem {
            checklist_id: self.id.clone(),
            item_id: item_id.into(),
        };
        self.store.dispatch(action)
    }

    /// Replaces the full item list.
    pub fn reorder_items(&mut self, items: Vec<ChecklistItem>) -> bool {
        let action = Action::ReorderItems {
            checklist_id: self.id.clone(),
            items,
        };
        self.store.dispatch(action)
    }

    /// Swaps an item with its neighbour in display order and renumbers every
    /// item's `order` from zero.
    ///
    /// Moving the first item up or the last item down is a no-op.
    pub fn move_item(&mut self, item_id: &ItemId, direction: MoveDirection) -> bool {
        let Some(checklist) = self.get() else {
            return false;
        };

        let mut items: Vec<ChecklistItem> =
            checklist.sorted_items().into_iter().cloned().collect();
        let Some(position) = items.iter().position(|item| &item.id == item_id) else {
            return false;
        };
        let neighbour = match direction {
            MoveDirection::Up => position.checked_sub(1),
            MoveDirection::Down => position.checked_add(1).filter(|next| *next < items.len()),
        };
        let Some(neighbour) = neighbour else {
            return false;
        };

        items.swap(position, neighbour);
        for (item, order) in items.iter_mut().zip(0_u32..) {
            item.order = order;
        }
        self.reorder_items(items)
    }

    /// Increments an item's forgotten counter.
    pub fn record_forgotten(&mut self, item_id: impl Into<ItemId>) -> bool {
        let action = Action::RecordForgottenItem {
            checklist_id: self.id.clone(),
            item_id: item_id.into(),
        };
        self.store.dispatch(action)
    }

    /// Finishes the current run.
    ///
    /// Saves a history snapshot, then records a forgotten run against the
    /// first item matching each unchecked name. Check state is left as is;
    /// call [`ChecklistSelector::reset`] to start over.
    ///
    /// Returns the saved entry, or `None` when the checklist is unknown.
    pub fn complete(&mut self) -> Option<CheckHistory> {
        let checklist = self.get()?;
        let entry = CheckHistory::from_checklist(checklist, self.store.clock());
        let forgotten: Vec<ItemId> = entry
            .forgotten_items
            .iter()
            .filter_map(|name| checklist.item_named(name))
            .map(|item| item.id.clone())
            .collect();

        self.store.dispatch(Action::SaveCheckHistory(entry.clone()));
        for item_id in forgotten {
            self.record_forgotten(item_id);
        }
        Some(entry)
    }
}

/// History read and append operations.
pub struct HistorySelector<'a, S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    store: &'a mut ChecklistStore<S, C>,
}

impl<S, C> HistorySelector<'_, S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Returns history entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[CheckHistory] {
        &self.store.state().history
    }

    /// Prepends an entry, dropping the oldest beyond the history limit.
    pub fn save(&mut self, entry: CheckHistory) -> bool {
        self.store.dispatch(Action::SaveCheckHistory(entry))
    }

    /// Removes every entry, keeping checklists and settings.
    pub fn clear(&mut self) -> bool {
        let next = self.store.state().without_history();
        self.store.dispatch(Action::LoadData(Box::new(next)))
    }
}

/// Settings read and partial-update operations.
pub struct SettingsSelector<'a, S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    store: &'a mut ChecklistStore<S, C>,
}

impl<S, C> SettingsSelector<'_, S, C>
where
    S: KeyValueStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Returns the current settings.
    #[must_use]
    pub fn get(&self) -> &AppSettings {
        &self.store.state().settings
    }

    /// Merges `patch` into the current settings.
    pub fn update(&mut self, patch: SettingsPatch) -> bool {
        self.store.dispatch(Action::UpdateSettings(patch))
    }
}
