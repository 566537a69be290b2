use async_trait::async_trait;

use super::errors::CapabilityError;
use crate::clipboard::ClipboardContent;

/// Monotonic generation counter of the system clipboard.
///
/// Every write, from any process, yields a larger token than the one before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ChangeToken(pub u64);

impl std::fmt::Display for ChangeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read/write access to the shared system clipboard.
#[async_trait]
pub trait SystemClipboardPort: Send + Sync {
    /// Replace the clipboard contents. Images are written as a native bitmap.
    async fn write(&self, content: &ClipboardContent) -> Result<ChangeToken, CapabilityError>;

    /// Current generation token, cheap enough to call on every poll.
    async fn change_token(&self) -> Result<ChangeToken, CapabilityError>;

    /// Plain text on the clipboard, if any.
    async fn read_text(&self) -> Result<Option<String>, CapabilityError>;

    /// Encoded image bytes on the clipboard, if any.
    async fn read_image(&self) -> Result<Option<Vec<u8>>, CapabilityError>;
}
