//! Application settings and partial updates.

use serde::{Deserialize, Serialize};

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

/// Flat record of user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Reminder time offered for new checklists, `HH:mm`.
    pub default_reminder_time: String,
    /// Whether reminders may be scheduled.
    pub notifications_enabled: bool,
    /// Whether the UI should emit haptic feedback.
    pub haptic_feedback: bool,
    /// Colour scheme preference.
    pub theme: Theme,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_reminder_time: "08:00".to_owned(),
            notifications_enabled: true,
            haptic_feedback: true,
            theme: Theme::System,
        }
    }
}

impl AppSettings {
    /// Returns a copy with every field set in `patch` overwritten.
    #[must_use]
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        Self {
            default_reminder_time: patch
                .default_reminder_time
                .clone()
                .unwrap_or_else(|| self.default_reminder_time.clone()),
            notifications_enabled: patch
                .notifications_enabled
                .unwrap_or(self.notifications_enabled),
            haptic_feedback: patch.haptic_feedback.unwrap_or(self.haptic_feedback),
            theme: patch.theme.unwrap_or(self.theme),
        }
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    /// New default reminder time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_reminder_time: Option<String>,
    /// New notifications flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    /// New haptic feedback flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haptic_feedback: Option<bool>,
    /// New theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl SettingsPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default reminder time.
    #[must_use]
    pub fn with_default_reminder_time(mut self, time: impl Into<String>) -> Self {
        self.default_reminder_time = Some(time.into());
        self
    }

    /// Sets the notifications flag.
    #[must_use]
    pub const fn with_notifications_enabled(mut self, enabled: bool) -> Self {
        self.notifications_enabled = Some(enabled);
        self
    }

    /// Sets the haptic feedback flag.
    #[must_use]
    pub const fn with_haptic_feedback(mut self, enabled: bool) -> Self {
        self.haptic_feedback = Some(enabled);
        self
    }

    /// Sets the theme.
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Returns `true` when the patch sets no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.default_reminder_time.is_none()
            && self.notifications_enabled.is_none()
            && self.haptic_feedback.is_none()
            && self.theme.is_none()
    }
}
