use ck_core::TargetApp;
use tracing::{info, info_span, Instrument};

use crate::paste::{PasteError, PasteExecutor, PasteReport, PasteRequest};
use crate::services::ClipboardHistory;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PasteHistoryEntryError {
    #[error("no history entry at position {0}")]
    NotFound(usize),

    #[error(transparent)]
    Paste(#[from] PasteError),
}

/// Pastes the entry at a 1-based list position.
pub struct PasteHistoryEntry<'a> {
    history: ClipboardHistory,
    executor: &'a PasteExecutor,
}

impl<'a> PasteHistoryEntry<'a> {
    pub fn new(history: ClipboardHistory, executor: &'a PasteExecutor) -> Self {
        Self { history, executor }
    }

    pub async fn execute(
        &self,
        position: usize,
        target: Option<TargetApp>,
        direct_mode: bool,
    ) -> Result<PasteReport, PasteHistoryEntryError> {
        let span = info_span!("usecase.paste_history_entry.execute", position, direct_mode);
        async {
            let entry = self
                .history
                .at_position(position)
                .ok_or(PasteHistoryEntryError::NotFound(position))?;
            info!(entry_id = %entry.id(), "Pasting history entry");

            let request = PasteRequest::new(entry)
                .with_target(target)
                .direct(direct_mode);
            Ok(self.executor.paste(request).await?)
        }
        .instrument(span)
        .await
    }
}
