//! Command vocabulary shared by the paste pipeline and the key/script adapters.
//!
//! Each adapter maps these onto its own mechanism (virtual key codes, enigo
//! keys, AppleScript source). The pipeline never sees platform key codes.

use serde::{Deserialize, Serialize};

/// Editing gestures delivered as synthetic key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditingShortcut {
    /// Platform paste shortcut (Cmd+V / Ctrl+V).
    Paste,
    /// Extend the selection one character to the left (Shift+Left).
    SelectPreviousCharacter,
    /// Editor "insert link" command (Cmd+K / Ctrl+K).
    ConvertSelectionToLink,
    /// Collapse any selection by moving right.
    MoveRight,
    /// Cmd+End / Ctrl+End.
    JumpToDocumentEnd,
    /// Cmd+Right / End.
    JumpLineEnd,
}

/// Browsers whose front page URL can be queried by script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownBrowser {
    Chrome,
    Safari,
    Firefox,
}

impl KnownBrowser {
    pub fn from_bundle_id(bundle_id: &str) -> Option<Self> {
        match bundle_id {
            "com.google.Chrome" => Some(KnownBrowser::Chrome),
            "com.apple.Safari" => Some(KnownBrowser::Safari),
            "org.mozilla.firefox" => Some(KnownBrowser::Firefox),
            _ => None,
        }
    }

    /// Application name as scripting dictionaries know it.
    pub fn app_name(&self) -> &'static str {
        match self {
            KnownBrowser::Chrome => "Google Chrome",
            KnownBrowser::Safari => "Safari",
            KnownBrowser::Firefox => "Firefox",
        }
    }
}

/// OS-level scripted commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptCommand {
    Paste,
    /// Hold shift and step left the given number of times.
    SelectPreviousCharacters(usize),
    ConvertSelectionToLink,
    /// Ask a browser for the URL of its front page. Produces output.
    FrontPageUrl(KnownBrowser),
}
