use async_trait::async_trait;
use ck_core::ports::{CapabilityError, ForegroundAppPort};
use ck_core::TargetApp;

/// No foreground-application tracking. Entries carry no source application
/// and paste targets whatever has focus.
#[derive(Debug, Default)]
pub struct UnsupportedForegroundApp;

#[async_trait]
impl ForegroundAppPort for UnsupportedForegroundApp {
    async fn frontmost(&self) -> Result<Option<TargetApp>, CapabilityError> {
        Ok(None)
    }

    async fn activate(&self, _app: &TargetApp) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported("application activation"))
    }
}
