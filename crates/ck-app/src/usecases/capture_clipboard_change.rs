//! Use case for turning a clipboard change into a history entry
//! 将剪贴板变化转换为历史条目的用例

use std::sync::Arc;

use ck_core::ports::{
    CapabilityError, ChangeOrigin, ChangeToken, ClipboardChangeOriginPort, ForegroundAppPort,
    SystemClipboardPort,
};
use ck_core::ClipboardEntry;
use tokio::sync::Mutex;
use tracing::{debug, info_span, trace, Instrument};

use super::ingest_clipboard_sample::IngestClipboardSample;
use crate::models::ClipboardSample;

/// Checks the clipboard generation token and ingests external changes.
///
/// ## Behavior / 行为
/// - Does nothing while the token is unchanged.
/// - Changes written by the paste pipeline are skipped.
/// - While a paste is writing the clipboard the change is left for the
///   next check, so the pipeline's own write is never ingested.
/// - A sample is kept only if the token is unchanged after reading it, and
///   the token counts as seen only once a sample was kept.
pub struct CaptureClipboardChange {
    clipboard: Arc<dyn SystemClipboardPort>,
    change_origin: Arc<dyn ClipboardChangeOriginPort>,
    foreground: Arc<dyn ForegroundAppPort>,
    ingest: IngestClipboardSample,
    last_seen: Mutex<Option<ChangeToken>>,
}

impl CaptureClipboardChange {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        change_origin: Arc<dyn ClipboardChangeOriginPort>,
        foreground: Arc<dyn ForegroundAppPort>,
        ingest: IngestClipboardSample,
    ) -> Self {
        Self {
            clipboard,
            change_origin,
            foreground,
            ingest,
            last_seen: Mutex::new(None),
        }
    }

    /// Record the current token without ingesting, so content already on the
    /// clipboard at startup is not added.
    pub async fn prime(&self) -> Result<(), CapabilityError> {
        let token = self.clipboard.change_token().await?;
        *self.last_seen.lock().await = Some(token);
        Ok(())
    }

    pub async fn execute(&self) -> Result<Option<ClipboardEntry>, CapabilityError> {
        let token = self.clipboard.change_token().await?;

        let mut last_seen = self.last_seen.lock().await;
        if *last_seen == Some(token) {
            return Ok(None);
        }

        let span = info_span!("usecase.capture_clipboard_change.execute", %token);
        async {
            match self.change_origin.classify(token).await {
                ChangeOrigin::WriteInFlight => {
                    trace!("Local clipboard write in flight, checking later");
                    return Ok(None);
                }
                ChangeOrigin::LocalWrite => {
                    debug!("Skipping clipboard change made by paste");
                    *last_seen = Some(token);
                    return Ok(None);
                }
                ChangeOrigin::External => {}
            }

            let sample = self.sample().await?;

            // The sample belongs to `token` only if nothing wrote in between.
            let after = self.clipboard.change_token().await?;
            if after != token {
                debug!(%after, "Clipboard changed while sampling, checking later");
                return Ok(None);
            }

            *last_seen = Some(token);
            Ok(self.ingest.execute(sample))
        }
        .instrument(span)
        .await
    }

    async fn sample(&self) -> Result<ClipboardSample, CapabilityError> {
        let text = self.clipboard.read_text().await?;
        let image = if text.as_deref().is_some_and(|text| !text.is_empty()) {
            None
        } else {
            self.clipboard.read_image().await?
        };

        let source_app = match self.foreground.frontmost().await {
            Ok(app) => app.and_then(|app| app.name),
            Err(err) => {
                debug!(error = %err, "Foreground application unknown");
                None
            }
        };

        Ok(ClipboardSample {
            text,
            image,
            source_app,
        })
    }
}
