use super::model::*;
use crate::clipboard::DEFAULT_CAPACITY;
use crate::paste::{AppPasteBehavior, AppPasteBehaviors, PasteBehavior};

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

const DEFAULT_EXCLUDED_APPS: &[&str] = &[
    "1Password",
    "1Password 7",
    "Bitwarden",
    "LastPass",
    "Dashlane",
    "Keeper",
    "KeePassXC",
    "Enpass",
];

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            mask_passwords: true,
            excluded_apps: DEFAULT_EXCLUDED_APPS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl Default for PasteTimings {
    fn default() -> Self {
        Self {
            pre_activation_ms: 200,
            pre_activation_sticky_ms: 500,
            activation_ms: 300,
            activation_sticky_ms: 500,
            clipboard_settle_ms: 100,
            link_conversion_lead_ms: 500,
            selection_step_ms: 1,
            selection_to_link_ms: 100,
            caret_clear_ms: 50,
            caret_end_ms: 50,
            caret_end_settle_ms: 150,
            typing_interval_ms: 10,
            release_with_target_ms: 500,
            release_without_target_ms: 300,
            sticky_focus_return_ms: 700,
        }
    }
}

impl Default for AppPasteBehaviors {
    fn default() -> Self {
        [AppPasteBehavior {
            app_identifier: "com.google.Chrome".to_string(),
            app_name: "Google Chrome".to_string(),
            url_pattern: Some("docs.google.com".to_string()),
            behavior: PasteBehavior::LinkConversion,
        }]
        .into_iter()
        .collect()
    }
}
