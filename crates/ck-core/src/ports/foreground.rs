use async_trait::async_trait;

use super::errors::CapabilityError;
use crate::paste::TargetApp;

/// Query and activate foreground applications.
#[async_trait]
pub trait ForegroundAppPort: Send + Sync {
    async fn frontmost(&self) -> Result<Option<TargetApp>, CapabilityError>;

    async fn activate(&self, app: &TargetApp) -> Result<(), CapabilityError>;
}

/// Live URL of the page shown by a browser.
#[async_trait]
pub trait PageUrlPort: Send + Sync {
    /// `None` when the application is not a known browser or the query failed.
    async fn front_page_url(&self, app_identifier: &str) -> Option<String>;
}

/// The history view (popover) that initiated a sticky-mode paste.
#[async_trait]
pub trait HistoryViewPort: Send + Sync {
    async fn bring_to_front(&self);
}

#[cfg(test)]
mockall::mock! {
    pub PageUrl {}

    #[async_trait]
    impl PageUrlPort for PageUrl {
        async fn front_page_url(&self, app_identifier: &str) -> Option<String>;
    }
}
