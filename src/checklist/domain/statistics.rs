//! Aggregate statistics over check history.

use super::{CheckHistory, ChecklistId, checklist::rounded_percent};
use chrono::{DateTime, Days, NaiveDate, TimeZone};
use std::collections::HashMap;

/// Number of entries kept in [`Statistics::forgotten_items_ranking`].
pub const FORGOTTEN_RANKING_LIMIT: usize = 10;

/// Number of calendar days covered by [`Statistics::weekly_data`].
pub const WEEKLY_WINDOW_DAYS: u64 = 7;

/// Summary of check history for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Number of history entries.
    pub total_checks: usize,
    /// Number of entries with nothing forgotten.
    pub perfect_checks: usize,
    /// Most frequently forgotten item names, most frequent first.
    pub forgotten_items_ranking: Vec<ForgottenItemRank>,
    /// Checklists by number of completed runs, most used first.
    pub checklist_usage_ranking: Vec<ChecklistUsage>,
    /// One bucket per day of the trailing week, oldest first.
    pub weekly_data: Vec<DailyActivity>,
}

/// Forgotten-item frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgottenItemRank {
    /// Item name as recorded in history.
    pub item_name: String,
    /// Number of runs in which it was forgotten.
    pub count: usize,
}

/// Checklist usage frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistUsage {
    /// Checklist identifier.
    pub checklist_id: ChecklistId,
    /// Most recent name recorded for the checklist.
    pub checklist_name: String,
    /// Number of completed runs.
    pub count: usize,
}

/// Activity on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyActivity {
    /// Calendar date in the reference time zone.
    pub date: NaiveDate,
    /// Short `M/d` label.
    pub label: String,
    /// Number of runs completed that day.
    pub checks: usize,
    /// Share of that day's runs that were perfect, 0–100.
    pub perfect_rate: usize,
}

/// Computes statistics for `history` as seen at `now`.
///
/// Calendar days are taken in `now`'s time zone. `history` is expected
/// newest-first, so the first name seen for a checklist is its latest.
#[must_use]
pub fn compute_statistics<Tz: TimeZone>(history: &[CheckHistory], now: &DateTime<Tz>) -> Statistics {
    Statistics {
        total_checks: history.len(),
        perfect_checks: history.iter().filter(|entry| entry.is_perfect()).count(),
        forgotten_items_ranking: forgotten_items_ranking(history),
        checklist_usage_ranking: checklist_usage_ranking(history),
        weekly_data: weekly_data(history, now),
    }
}

fn forgotten_items_ranking(history: &[CheckHistory]) -> Vec<ForgottenItemRank> {
    let mut ranking: Vec<ForgottenItemRank> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for name in history.iter().flat_map(|entry| &entry.forgotten_items) {
        if let Some(rank) = positions
            .get(name.as_str())
            .and_then(|position| ranking.get_mut(*position))
        {
            rank.count += 1;
        } else {
            positions.insert(name.as_str(), ranking.len());
            ranking.push(ForgottenItemRank {
                item_name: name.clone(),
                count: 1,
            });
        }
    }

    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(FORGOTTEN_RANKING_LIMIT);
    ranking
}

fn checklist_usage_ranking(history: &[CheckHistory]) -> Vec<ChecklistUsage> {
    let mut ranking: Vec<ChecklistUsage> = Vec::new();
    let mut positions: HashMap<&ChecklistId, usize> = HashMap::new();

    for entry in history {
        if let Some(usage) = positions
            .get(&entry.checklist_id)
            .and_then(|position| ranking.get_mut(*position))
        {
            usage.count += 1;
        } else {
            positions.insert(&entry.checklist_id, ranking.len());
            ranking.push(ChecklistUsage {
                checklist_id: entry.checklist_id.clone(),
                checklist_name: entry.checklist_name.clone(),
                count: 1,
            });
        }
    }

    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

fn weekly_data<Tz: TimeZone>(history: &[CheckHistory], now: &DateTime<Tz>) -> Vec<DailyActivity> {
    let zone = now.timezone();
    let today = now.date_naive();

    (0..WEEKLY_WINDOW_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| {
            let (checks, perfect) = history
                .iter()
                .filter(|entry| entry.date.with_timezone(&zone).date_naive() == date)
                .fold((0_usize, 0_usize), |(checks, perfect), entry| {
                    (checks + 1, perfect + usize::from(entry.is_perfect()))
                });

            DailyActivity {
                date,
                label: date.format("%-m/%-d").to_string(),
                checks,
                perfect_rate: rounded_percent(perfect, checks),
            }
        })
        .collect()
}
