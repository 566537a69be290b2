//! Use case for recording a clipboard observation in the history
//! 将剪贴板采样写入历史的用例

use ck_core::settings::PrivacySettings;
use ck_core::{is_likely_password, ClipboardEntry};
use tracing::{debug, info_span};

use crate::models::ClipboardSample;
use crate::services::ClipboardHistory;

/// Adds a clipboard sample to the history.
///
/// ## Behavior / 行为
/// - Non-empty text wins over an image in the same sample.
/// - Text is flagged as a password when it comes from an excluded
///   application or looks like one.
pub struct IngestClipboardSample {
    history: ClipboardHistory,
    privacy: PrivacySettings,
}

impl IngestClipboardSample {
    pub fn new(history: ClipboardHistory, privacy: PrivacySettings) -> Self {
        Self { history, privacy }
    }

    pub fn execute(&self, sample: ClipboardSample) -> Option<ClipboardEntry> {
        let _span = info_span!(
            "usecase.ingest_clipboard_sample.execute",
            source_app = sample.source_app.as_deref(),
        )
        .entered();

        let ClipboardSample {
            text,
            image,
            source_app,
        } = sample;

        if let Some(text) = text.filter(|text| !text.is_empty()) {
            let is_password = self.privacy.is_excluded(source_app.as_deref())
                || is_likely_password(&text);
            let entry = self.history.add_text(&text, source_app, is_password);
            if let Some(entry) = &entry {
                debug!(entry_id = %entry.id(), is_password, "Recorded text entry");
            }
            return entry;
        }

        let entry = self.history.add_image_data(image?, source_app);
        if let Some(entry) = &entry {
            debug!(entry_id = %entry.id(), "Recorded image entry");
        }
        entry
    }
}
