//! Shared builders and doubles for checklist unit tests.

use crate::checklist::{
    domain::{AppState, CheckHistory, Checklist, ChecklistId, ChecklistItem, HistoryId, ItemId},
    ports::{KeyValueStorage, StorageResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

mockall::mock! {
    pub Storage {}

    #[async_trait]
    impl KeyValueStorage for Storage {
        async fn get(&self, key: &str) -> StorageResult<Option<String>>;
        async fn set(&self, key: &str, value: String) -> StorageResult<()>;
        async fn clear(&self) -> StorageResult<()>;
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn epoch() -> DateTime<Utc> {
    at(2024, 5, 1, 9)
}

pub fn item(id: &str, name: &str, order: u32) -> ChecklistItem {
    ChecklistItem {
        id: ItemId::from(id),
        name: name.to_owned(),
        emoji: None,
        is_checked: false,
        order,
        forgot_count: 0,
        checked_count: 0,
    }
}

pub fn checklist(id: &str, items: Vec<ChecklistItem>) -> Checklist {
    Checklist {
        id: ChecklistId::from(id),
        name: format!("List {id}"),
        emoji: "🎒".to_owned(),
        color: "#9B59B6".to_owned(),
        items,
        is_custom: true,
        created_at: epoch(),
        updated_at: epoch(),
        reminder: None,
    }
}

pub fn entry(
    id: &str,
    checklist_id: &str,
    checklist_name: &str,
    date: DateTime<Utc>,
    forgotten: &[&str],
) -> CheckHistory {
    CheckHistory {
        id: HistoryId::from(id),
        checklist_id: ChecklistId::from(checklist_id),
        checklist_name: checklist_name.to_owned(),
        date,
        total_items: 5,
        checked_items: 5_u32.saturating_sub(u32::try_from(forgotten.len()).unwrap_or(5)),
        forgotten_items: forgotten.iter().map(|name| (*name).to_owned()).collect(),
    }
}

/// State with one checklist `c1` holding items `a` (order 0) and `b` (order 1).
pub fn two_item_state() -> AppState {
    AppState {
        checklists: vec![checklist("c1", vec![item("a", "Wallet", 0), item("b", "Keys", 1)])],
        ..AppState::default()
    }
}

pub fn item_in<'a>(state: &'a AppState, checklist_id: &str, item_id: &str) -> Option<&'a ChecklistItem> {
    state
        .checklist(&ChecklistId::from(checklist_id))
        .and_then(|checklist| checklist.item(&ItemId::from(item_id)))
}
