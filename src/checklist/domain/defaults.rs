//! Built-in seed checklists and scene colours.

use super::{Checklist, ChecklistId, ChecklistItem, ItemId};
use chrono::{DateTime, Utc};

/// Accent colours associated with outing scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneColor {
    /// Teal.
    Commute,
    /// Coral.
    Travel,
    /// Sky blue.
    Gym,
    /// Gold.
    Date,
    /// Navy.
    Business,
    /// Green.
    Outdoor,
    /// Purple, used for user-created lists.
    Custom,
}

impl SceneColor {
    /// Every scene colour, in picker order.
    pub const ALL: [Self; 7] = [
        Self::Commute,
        Self::Travel,
        Self::Gym,
        Self::Date,
        Self::Business,
        Self::Outdoor,
        Self::Custom,
    ];

    /// Returns the `#RRGGBB` representation.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Commute => "#4ECDC4",
            Self::Travel => "#FF6B6B",
            Self::Gym => "#45B7D1",
            Self::Date => "#F8B500",
            Self::Business => "#2C3E50",
            Self::Outdoor => "#2ECC71",
            Self::Custom => "#9B59B6",
        }
    }
}

struct Seed {
    key: &'static str,
    name: &'static str,
    emoji: &'static str,
    color: SceneColor,
    items: &'static [(&'static str, &'static str)],
}

const SEEDS: [Seed; 6] = [
    Seed {
        key: "commute",
        name: "Commute",
        emoji: "🚃",
        color: SceneColor::Commute,
        items: &[
            ("Phone", "📱"),
            ("Wallet", "👛"),
            ("Keys", "🔑"),
            ("Transit card", "💳"),
            ("Earphones", "🎧"),
        ],
    },
    Seed {
        key: "travel",
        name: "Travel",
        emoji: "✈️",
        color: SceneColor::Travel,
        items: &[
            ("Passport", "🛂"),
            ("Charger", "🔌"),
            ("Toothbrush", "🪥"),
            ("Medicine", "💊"),
            ("Change of clothes", "👕"),
            ("Camera", "📷"),
        ],
    },
    Seed {
        key: "gym",
        name: "Gym",
        emoji: "💪",
        color: SceneColor::Gym,
        items: &[
            ("Training wear", "👕"),
            ("Shoes", "👟"),
            ("Towel", "🧻"),
            ("Water bottle", "🥤"),
            ("Membership card", "💳"),
        ],
    },
    Seed {
        key: "date",
        name: "Date",
        emoji: "💕",
        color: SceneColor::Date,
        items: &[
            ("Wallet", "👛"),
            ("Perfume", "🧴"),
            ("Handkerchief", "🤧"),
            ("Mints", "🍬"),
        ],
    },
    Seed {
        key: "business",
        name: "Business trip",
        emoji: "💼",
        color: SceneColor::Business,
        items: &[
            ("Laptop", "💻"),
            ("Business cards", "📇"),
            ("Documents", "📝"),
            ("Charger", "🔌"),
            ("Pen", "🖊️"),
        ],
    },
    Seed {
        key: "outdoor",
        name: "Outdoor",
        emoji: "⛺",
        color: SceneColor::Outdoor,
        items: &[
            ("Sunscreen", "🧴"),
            ("Hat", "🧢"),
            ("Water", "💧"),
            ("First aid kit", "🩹"),
            ("Snacks", "🍙"),
        ],
    },
];

/// Returns the built-in checklists, stamped with `now`.
///
/// Identifiers are derived from the scene so that resetting to defaults
/// yields the same ids every time.
#[must_use]
pub fn default_checklists(now: DateTime<Utc>) -> Vec<Checklist> {
    SEEDS.iter().map(|seed| seed_checklist(seed, now)).collect()
}

fn seed_checklist(seed: &Seed, now: DateTime<Utc>) -> Checklist {
    let items = seed
        .items
        .iter()
        .zip(0_u32..)
        .map(|(&(name, emoji), order)| ChecklistItem {
            id: ItemId::from(format!("default-{}-{order}", seed.key)),
            name: name.to_owned(),
            emoji: Some(emoji.to_owned()),
            is_checked: false,
            order,
            forgot_count: 0,
            checked_count: 0,
        })
        .collect();

    Checklist {
        id: ChecklistId::from(format!("default-{}", seed.key)),
        name: seed.name.to_owned(),
        emoji: seed.emoji.to_owned(),
        color: seed.color.hex().to_owned(),
        items,
        is_custom: false,
        created_at: now,
        updated_at: now,
        reminder: None,
    }
}
