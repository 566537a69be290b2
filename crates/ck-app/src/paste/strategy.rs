use std::sync::Arc;

use async_trait::async_trait;
use ck_core::paste::{splice_at_caret, EditingShortcut, ScriptCommand};
use ck_core::ports::{CapabilityError, FocusedControlPort, KeyEventPort, ScriptRunnerPort};
use tracing::debug;

use super::report::StrategyKind;

/// One way of getting the clipboard contents into the focused application.
///
/// The executor tries its strategies in order and stops at the first `Ok`.
#[async_trait]
pub trait DeliveryStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// `clipboard_text` is the text just written to the clipboard, `None` for images.
    async fn attempt(&self, clipboard_text: Option<&str>) -> Result<(), CapabilityError>;
}

/// Writes text straight into the focused control through accessibility.
pub struct AccessibilityInsertStrategy {
    control: Arc<dyn FocusedControlPort>,
}

impl AccessibilityInsertStrategy {
    pub fn new(control: Arc<dyn FocusedControlPort>) -> Self {
        Self { control }
    }

    /// Insert `text` at the caret, keeping any selected text, and move the
    /// caret past the insertion.
    ///
    /// When the control's value or selection cannot be read, or the new value
    /// cannot be written, falls back to the selected-text attribute.
    pub async fn insert(&self, text: &str) -> Result<(), CapabilityError> {
        let current = match self.control.read_text().await {
            Ok(current) => current,
            Err(CapabilityError::NoFocusedElement) => {
                return Err(CapabilityError::NoFocusedElement);
            }
            Err(err) => {
                debug!(error = %err, "Focused value unreadable, writing selected text");
                return self.control.replace_selection(text).await;
            }
        };

        let spliced = splice_at_caret(&current.value, current.selection, text);
        if let Err(err) = self.control.set_value(&spliced.value).await {
            debug!(error = %err, "Setting focused value failed, writing selected text");
            return self.control.replace_selection(text).await;
        }

        // The text is in; a caret that fails to move is cosmetic.
        if let Err(err) = self.control.set_selection(spliced.caret).await {
            debug!(error = %err, "Failed to move caret after insertion");
        }
        Ok(())
    }
}

#[async_trait]
impl DeliveryStrategy for AccessibilityInsertStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AccessibilityInsert
    }

    async fn attempt(&self, clipboard_text: Option<&str>) -> Result<(), CapabilityError> {
        let text = clipboard_text.ok_or(CapabilityError::NotApplicable("accessibility insertion"))?;
        self.insert(text).await
    }
}

/// Asks the OS scripting layer to press the paste shortcut.
pub struct ScriptedPasteStrategy {
    scripts: Arc<dyn ScriptRunnerPort>,
}

impl ScriptedPasteStrategy {
    pub fn new(scripts: Arc<dyn ScriptRunnerPort>) -> Self {
        Self { scripts }
    }
}

#[async_trait]
impl DeliveryStrategy for ScriptedPasteStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ScriptedPaste
    }

    async fn attempt(&self, _clipboard_text: Option<&str>) -> Result<(), CapabilityError> {
        self.scripts.run(ScriptCommand::Paste).await.map(|_| ())
    }
}

/// Posts the platform paste shortcut as synthetic key events.
pub struct SyntheticShortcutStrategy {
    keys: Arc<dyn KeyEventPort>,
}

impl SyntheticShortcutStrategy {
    pub fn new(keys: Arc<dyn KeyEventPort>) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl DeliveryStrategy for SyntheticShortcutStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SyntheticShortcut
    }

    async fn attempt(&self, _clipboard_text: Option<&str>) -> Result<(), CapabilityError> {
        self.keys.send_shortcut(EditingShortcut::Paste).await
    }
}
