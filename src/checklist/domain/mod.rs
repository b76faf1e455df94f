//! Domain model for checklist state management.
//!
//! Records, the closed [`Action`] set, the pure [`transition`] function, the
//! default dataset, and history statistics. Nothing here touches storage or
//! the async runtime.

mod action;
mod checklist;
mod defaults;
mod error;
mod history;
mod ids;
mod item;
mod reducer;
mod settings;
mod state;
mod statistics;

pub use action::Action;
pub use checklist::{
    Checklist, ChecklistProgress, DEFAULT_CUSTOM_EMOJI, NewChecklistRequest, ReminderSettings,
};
pub use defaults::{SceneColor, default_checklists};
pub use error::ChecklistDomainError;
pub use history::CheckHistory;
pub use ids::{ChecklistId, HistoryId, ItemId};
pub use item::ChecklistItem;
pub use reducer::{apply, transition};
pub use settings::{AppSettings, SettingsPatch, Theme};
pub use state::{AppState, HISTORY_LIMIT};
pub use statistics::{
    ChecklistUsage, DailyActivity, FORGOTTEN_RANKING_LIMIT, ForgottenItemRank, Statistics,
    WEEKLY_WINDOW_DAYS, compute_statistics,
};
