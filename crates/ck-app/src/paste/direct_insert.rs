use ck_core::paste::EditingShortcut;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::executor::PasteExecutor;
use super::report::{DeliveryMode, PasteReport, StrategyKind};

impl PasteExecutor {
    /// Sticky-mode insertion: append `text` after the existing content of the
    /// focused control, separated by one space. The clipboard is left alone.
    pub(super) async fn insert_directly(&self, text: &str) -> PasteReport {
        let mut report = PasteReport::new(DeliveryMode::DirectInsert);

        self.press(EditingShortcut::MoveRight).await;
        sleep(self.timings.caret_clear()).await;

        self.press(EditingShortcut::JumpToDocumentEnd).await;
        sleep(self.timings.caret_end()).await;
        self.press(EditingShortcut::JumpLineEnd).await;
        sleep(self.timings.caret_end_settle()).await;

        let inserted = format!(" {text}");

        match self.accessibility.insert(&inserted).await {
            Ok(()) => {
                report.delivered_by = Some(StrategyKind::AccessibilityInsert);
            }
            Err(err) => {
                info!(error = %err, "Direct insertion failed, typing instead");
                if self.type_text(&inserted).await {
                    report.delivered_by = Some(StrategyKind::TypedCharacters);
                }
            }
        }

        report
    }

    async fn press(&self, shortcut: EditingShortcut) {
        if let Err(err) = self.keys.send_shortcut(shortcut).await {
            debug!(?shortcut, error = %err, "Caret key event failed");
        }
    }

    /// Type `text` one character at a time. Each event carries the character's
    /// whole UTF-16 sequence so surrogate pairs are never split.
    async fn type_text(&self, text: &str) -> bool {
        let mut units = [0u16; 2];
        for ch in text.chars() {
            if let Err(err) = self.keys.type_utf16(ch.encode_utf16(&mut units)).await {
                warn!(error = %err, "Typing failed");
                return false;
            }
            sleep(self.timings.typing_interval()).await;
        }
        true
    }
}
