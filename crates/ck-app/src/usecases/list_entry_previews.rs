use ck_core::PrivacyView;
use tracing::{debug, info_span};

use crate::models::EntryPreview;
use crate::services::ClipboardHistory;

/// Projects the history into list rows, masking passwords as configured.
pub struct ListEntryPreviews {
    history: ClipboardHistory,
    view: PrivacyView,
}

impl ListEntryPreviews {
    pub fn new(history: ClipboardHistory, mask_passwords: bool) -> Self {
        Self {
            history,
            view: PrivacyView::new(mask_passwords),
        }
    }

    pub fn execute(&self) -> Vec<EntryPreview> {
        let _span = info_span!("usecase.list_entry_previews.execute").entered();

        let previews: Vec<_> = self
            .history
            .snapshot()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryPreview::project(entry, index + 1, self.view))
            .collect();

        debug!(count = previews.len(), "Listed entry previews");
        previews
    }
}
