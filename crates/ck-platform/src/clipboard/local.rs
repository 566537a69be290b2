use std::sync::{Mutex, PoisonError};

use anyhow::Context;
use arboard::Clipboard;
use async_trait::async_trait;
use ck_core::ports::{CapabilityError, ChangeToken, SystemClipboardPort};
use ck_core::ClipboardContent;
use tracing::{debug, debug_span, trace};

#[cfg(not(target_os = "macos"))]
use super::generation::{image_fingerprint, text_fingerprint, FingerprintGeneration};
use super::image_codec::{decode_png, encode_png};

/// System clipboard backed by arboard.
///
/// macOS reports the pasteboard's own change count. Other platforms
/// synthesise one from a content fingerprint, see [`FingerprintGeneration`].
pub struct LocalClipboard {
    inner: Mutex<Clipboard>,
    #[cfg(not(target_os = "macos"))]
    generation: Mutex<FingerprintGeneration>,
}

impl LocalClipboard {
    pub fn new() -> anyhow::Result<Self> {
        let clipboard = Clipboard::new().context("Failed to open system clipboard")?;
        Ok(Self {
            inner: Mutex::new(clipboard),
            #[cfg(not(target_os = "macos"))]
            generation: Mutex::new(FingerprintGeneration::new()),
        })
    }

    fn with_clipboard<T>(
        &self,
        f: impl FnOnce(&mut Clipboard) -> Result<T, CapabilityError>,
    ) -> Result<T, CapabilityError> {
        let mut clipboard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut clipboard)
    }

    #[cfg(target_os = "macos")]
    fn current_token(&self) -> Result<ChangeToken, CapabilityError> {
        super::macos::change_count()
            .map(ChangeToken)
            .ok_or_else(|| CapabilityError::Other(anyhow::anyhow!("general pasteboard unavailable")))
    }

    #[cfg(not(target_os = "macos"))]
    fn current_token(&self) -> Result<ChangeToken, CapabilityError> {
        let fingerprint = self.with_clipboard(|clipboard| {
            match clipboard.get_text() {
                Ok(text) if !text.is_empty() => return Ok(Some(text_fingerprint(&text))),
                Ok(_) | Err(arboard::Error::ContentNotAvailable) => {}
                Err(err) => return Err(clipboard_error(err, "read text")),
            }
            match clipboard.get_image() {
                Ok(image) => Ok(Some(image_fingerprint(image.width, image.height, &image.bytes))),
                Err(arboard::Error::ContentNotAvailable) => Ok(None),
                Err(err) => Err(clipboard_error(err, "read image")),
            }
        })?;

        let mut generation = self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(ChangeToken(generation.observe(fingerprint)))
    }
}

fn clipboard_error(err: arboard::Error, action: &str) -> CapabilityError {
    CapabilityError::Other(anyhow::Error::new(err).context(format!("clipboard {action} failed")))
}

#[async_trait]
impl SystemClipboardPort for LocalClipboard {
    async fn write(&self, content: &ClipboardContent) -> Result<ChangeToken, CapabilityError> {
        let span = debug_span!(
            "platform.clipboard.write",
            kind = ?content.kind(),
            size_bytes = content.size_bytes(),
        );
        span.in_scope(|| {
            self.with_clipboard(|clipboard| match content {
                ClipboardContent::Text(text) => clipboard
                    .set_text(text.clone())
                    .map_err(|err| clipboard_error(err, "write text")),
                ClipboardContent::Image(png) => {
                    let image = decode_png(png)?;
                    clipboard
                        .set_image(image)
                        .map_err(|err| clipboard_error(err, "write image"))
                }
            })?;

            let token = self.current_token()?;
            debug!(%token, "Wrote system clipboard");
            Ok(token)
        })
    }

    async fn change_token(&self) -> Result<ChangeToken, CapabilityError> {
        let token = self.current_token()?;
        trace!(%token, "Read clipboard change token");
        Ok(token)
    }

    async fn read_text(&self) -> Result<Option<String>, CapabilityError> {
        self.with_clipboard(|clipboard| match clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(err) => Err(clipboard_error(err, "read text")),
        })
    }

    async fn read_image(&self) -> Result<Option<Vec<u8>>, CapabilityError> {
        let image = self.with_clipboard(|clipboard| match clipboard.get_image() {
            Ok(image) => Ok(Some(image)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(err) => Err(clipboard_error(err, "read image")),
        })?;

        image
            .map(|image| encode_png(&image).map_err(CapabilityError::from))
            .transpose()
    }
}
