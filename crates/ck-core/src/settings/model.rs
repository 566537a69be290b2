use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::paste::AppPasteBehaviors;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Fixed once the history buffer is constructed.
    pub capacity: usize,
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacySettings {
    pub mask_passwords: bool,
    /// Application names whose copies are always treated as passwords.
    pub excluded_apps: BTreeSet<String>,
}

/// Delays used by the paste pipeline, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteTimings {
    /// Before activating the target app.
    pub pre_activation_ms: u64,
    pub pre_activation_sticky_ms: u64,
    /// After activating the target app.
    pub activation_ms: u64,
    pub activation_sticky_ms: u64,
    /// Between writing the clipboard and the first delivery attempt.
    pub clipboard_settle_ms: u64,
    /// Between a successful paste and the link-conversion sequence.
    pub link_conversion_lead_ms: u64,
    pub selection_step_ms: u64,
    pub selection_to_link_ms: u64,
    pub caret_clear_ms: u64,
    pub caret_end_ms: u64,
    pub caret_end_settle_ms: u64,
    pub typing_interval_ms: u64,
    /// Busy flag hold time after delivery, with and without a target app.
    pub release_with_target_ms: u64,
    pub release_without_target_ms: u64,
    /// Extra delay before a sticky-mode paste hands focus back to the history view.
    pub sticky_focus_return_ms: u64,
}

impl PasteTimings {
    pub fn pre_activation(&self, sticky: bool) -> Duration {
        ms(if sticky {
            self.pre_activation_sticky_ms
        } else {
            self.pre_activation_ms
        })
    }

    pub fn activation(&self, sticky: bool) -> Duration {
        ms(if sticky {
            self.activation_sticky_ms
        } else {
            self.activation_ms
        })
    }

    pub fn release(&self, had_target: bool) -> Duration {
        ms(if had_target {
            self.release_with_target_ms
        } else {
            self.release_without_target_ms
        })
    }

    pub fn clipboard_settle(&self) -> Duration {
        ms(self.clipboard_settle_ms)
    }

    pub fn link_conversion_lead(&self) -> Duration {
        ms(self.link_conversion_lead_ms)
    }

    pub fn selection_step(&self) -> Duration {
        ms(self.selection_step_ms)
    }

    pub fn selection_to_link(&self) -> Duration {
        ms(self.selection_to_link_ms)
    }

    pub fn caret_clear(&self) -> Duration {
        ms(self.caret_clear_ms)
    }

    pub fn caret_end(&self) -> Duration {
        ms(self.caret_end_ms)
    }

    pub fn caret_end_settle(&self) -> Duration {
        ms(self.caret_end_settle_ms)
    }

    pub fn typing_interval(&self) -> Duration {
        ms(self.typing_interval_ms)
    }

    pub fn sticky_focus_return(&self) -> Duration {
        ms(self.sticky_focus_return_ms)
    }
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteSettings {
    pub behaviors: AppPasteBehaviors,
    pub timings: PasteTimings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub history: HistorySettings,
    pub privacy: PrivacySettings,
    pub paste: PasteSettings,
}

impl HistorySettings {
    pub fn poll_interval(&self) -> Duration {
        ms(self.poll_interval_ms)
    }
}

impl PrivacySettings {
    pub fn is_excluded(&self, app_name: Option<&str>) -> bool {
        app_name.is_some_and(|name| self.excluded_apps.contains(name))
    }
}
