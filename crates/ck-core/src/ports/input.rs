use async_trait::async_trait;

use super::errors::CapabilityError;
use crate::paste::EditingShortcut;

/// Synthetic keyboard events posted to the focused application.
#[async_trait]
pub trait KeyEventPort: Send + Sync {
    /// Press and release one editing shortcut.
    async fn send_shortcut(&self, shortcut: EditingShortcut) -> Result<(), CapabilityError>;

    /// Type one user-perceived character given as its complete UTF-16 sequence.
    async fn type_utf16(&self, units: &[u16]) -> Result<(), CapabilityError>;
}
