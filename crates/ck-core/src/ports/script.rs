use async_trait::async_trait;

use super::errors::CapabilityError;
use crate::paste::ScriptCommand;

/// Runs OS-level automation scripts (AppleScript on macOS).
#[async_trait]
pub trait ScriptRunnerPort: Send + Sync {
    /// Returns the script output, trimmed, when it produced any.
    async fn run(&self, command: ScriptCommand) -> Result<Option<String>, CapabilityError>;
}
