use ck_core::PasteBehavior;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    Clipboard,
    DirectInsert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    AccessibilityInsert,
    ScriptedPaste,
    SyntheticShortcut,
    TypedCharacters,
}

/// What happened during one paste attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasteReport {
    pub mode: DeliveryMode,
    pub behavior: PasteBehavior,
    /// `None` when every strategy failed.
    pub delivered_by: Option<StrategyKind>,
    pub link_converted: bool,
}

impl PasteReport {
    pub(crate) fn new(mode: DeliveryMode) -> Self {
        Self {
            mode,
            behavior: PasteBehavior::Normal,
            delivered_by: None,
            link_converted: false,
        }
    }

    pub fn delivered(&self) -> bool {
        self.delivered_by.is_some()
    }
}
