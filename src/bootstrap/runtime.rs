//! # Use Cases Accessor
//!
//! `AppRuntime` owns the dependencies and the long-lived services (history,
//! paste executor, clipboard capture). Frontends call
//! `runtime.usecases().xxx()` to get use case instances with their
//! dependencies pre-wired.
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure use case has a `new()` constructor taking its required ports
//! 2. Add a method to `UseCases` that calls `new()` with deps
//! 3. Frontends can now call `runtime.usecases().your_use_case()`

use std::sync::Arc;

use async_trait::async_trait;
use ck_app::usecases::{
    CaptureClipboardChange, ClearHistory, IngestClipboardSample, ListEntryPreviews,
    PasteHistoryEntry,
};
use ck_app::{AppDeps, ClipboardHistory, PasteExecutor};
use ck_core::TargetApp;
use ck_platform::runtime::{ClipboardCheck, PollingClipboardRuntime};
use tracing::debug;

/// Application runtime with dependencies.
///
/// 包含所有应用依赖的运行时。
pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,
    history: ClipboardHistory,
    executor: PasteExecutor,
    capture: Arc<CaptureClipboardChange>,
}

impl AppRuntime {
    /// Create a new AppRuntime from dependencies.
    /// 从依赖创建新的 AppRuntime。
    pub fn new(deps: AppDeps) -> Self {
        let history = ClipboardHistory::new(deps.settings.history.capacity);
        let executor = PasteExecutor::new(&deps);
        let capture = Arc::new(CaptureClipboardChange::new(
            deps.clipboard.clone(),
            deps.change_origin.clone(),
            deps.foreground.clone(),
            IngestClipboardSample::new(history.clone(), deps.settings.privacy.clone()),
        ));

        Self {
            deps,
            history,
            executor,
            capture,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }

    pub fn history(&self) -> &ClipboardHistory {
        &self.history
    }

    /// Polling runtime that feeds clipboard changes into the history.
    pub fn clipboard_runtime(&self) -> PollingClipboardRuntime {
        PollingClipboardRuntime::new(
            Arc::new(CaptureCheck(self.capture.clone())),
            self.deps.settings.history.poll_interval(),
        )
    }

    /// The application a paste issued now would target.
    pub async fn paste_target(&self) -> Option<TargetApp> {
        match self.deps.foreground.frontmost().await {
            Ok(app) => app,
            Err(err) => {
                debug!(error = %err, "No paste target");
                None
            }
        }
    }
}

/// Use case accessor bound to one [`AppRuntime`].
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn capture_clipboard_change(&self) -> Arc<CaptureClipboardChange> {
        self.runtime.capture.clone()
    }

    pub fn ingest_clipboard_sample(&self) -> IngestClipboardSample {
        IngestClipboardSample::new(
            self.runtime.history.clone(),
            self.runtime.deps.settings.privacy.clone(),
        )
    }

    pub fn list_entry_previews(&self) -> ListEntryPreviews {
        ListEntryPreviews::new(
            self.runtime.history.clone(),
            self.runtime.deps.settings.privacy.mask_passwords,
        )
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::new(self.runtime.history.clone())
    }

    pub fn paste_history_entry(&self) -> PasteHistoryEntry<'a> {
        PasteHistoryEntry::new(self.runtime.history.clone(), &self.runtime.executor)
    }
}

/// Adapts the capture use case to the platform polling runtime.
struct CaptureCheck(Arc<CaptureClipboardChange>);

#[async_trait]
impl ClipboardCheck for CaptureCheck {
    async fn check_once(&self) -> anyhow::Result<()> {
        self.0.execute().await?;
        Ok(())
    }
}
