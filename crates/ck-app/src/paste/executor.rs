use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use ck_core::paste::{is_web_link, BehaviorResolver};
use ck_core::ports::*;
use ck_core::settings::PasteTimings;
use ck_core::{ClipboardContent, PasteBehavior, TargetApp};
use tokio::time::sleep;
use tracing::{debug, info, info_span, warn, Instrument};

use super::busy::BusyGuard;
use super::error::PasteError;
use super::report::{DeliveryMode, PasteReport};
use super::request::PasteRequest;
use super::strategy::{
    AccessibilityInsertStrategy, DeliveryStrategy, ScriptedPasteStrategy,
    SyntheticShortcutStrategy,
};
use crate::deps::AppDeps;
use crate::services::ScriptedPageUrlProvider;

/// Delivers history entries into the application that last held focus.
///
/// ## Behavior / 行为
/// - One paste at a time. A request made while another is in flight is
///   rejected with [`PasteError::Busy`]; nothing is queued.
/// - Clipboard mode writes the entry to the clipboard and runs the strategy
///   chain: accessibility insertion, scripted paste, synthetic shortcut.
/// - Direct mode (sticky) appends text to the focused control without
///   touching the clipboard. Images always use clipboard mode.
/// - Exhausting every strategy is logged, never returned as an error.
pub struct PasteExecutor {
    pub(super) clipboard: Arc<dyn SystemClipboardPort>,
    pub(super) change_origin: Arc<dyn ClipboardChangeOriginPort>,
    pub(super) permission: Arc<dyn InjectionPermissionPort>,
    pub(super) foreground: Arc<dyn ForegroundAppPort>,
    pub(super) history_view: Arc<dyn HistoryViewPort>,
    pub(super) keys: Arc<dyn KeyEventPort>,
    pub(super) scripts: Arc<dyn ScriptRunnerPort>,
    pub(super) page_urls: Arc<dyn PageUrlPort>,
    pub(super) resolver: BehaviorResolver,
    pub(super) accessibility: Arc<AccessibilityInsertStrategy>,
    pub(super) strategies: Vec<Arc<dyn DeliveryStrategy>>,
    pub(super) timings: PasteTimings,
    busy: Arc<AtomicBool>,
}

impl PasteExecutor {
    pub fn new(deps: &AppDeps) -> Self {
        let accessibility = Arc::new(AccessibilityInsertStrategy::new(
            deps.focused_control.clone(),
        ));
        let strategies: Vec<Arc<dyn DeliveryStrategy>> = vec![
            accessibility.clone(),
            Arc::new(ScriptedPasteStrategy::new(deps.scripts.clone())),
            Arc::new(SyntheticShortcutStrategy::new(deps.key_events.clone())),
        ];

        Self {
            clipboard: deps.clipboard.clone(),
            change_origin: deps.change_origin.clone(),
            permission: deps.permission.clone(),
            foreground: deps.foreground.clone(),
            history_view: deps.history_view.clone(),
            keys: deps.key_events.clone(),
            scripts: deps.scripts.clone(),
            page_urls: Arc::new(ScriptedPageUrlProvider::new(deps.scripts.clone())),
            resolver: BehaviorResolver::new(deps.settings.paste.behaviors.clone()),
            accessibility,
            strategies,
            timings: deps.settings.paste.timings.clone(),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(std::sync::atomic::Ordering::Acquire)
    }

    /// Execute one paste request.
    ///
    /// # Returns / 返回值
    /// - `Ok(PasteReport)` once the full step sequence has run, whether or not
    ///   any strategy delivered the content
    /// - `Err(PasteError::Busy)` if another paste is still in progress
    pub async fn paste(&self, request: PasteRequest) -> Result<PasteReport, PasteError> {
        let Some(guard) = BusyGuard::try_acquire(&self.busy) else {
            info!(entry_id = %request.entry.id(), "Paste rejected, executor busy");
            return Err(PasteError::Busy);
        };

        let span = info_span!(
            "usecase.paste.execute",
            entry_id = %request.entry.id(),
            direct_mode = request.direct_mode,
            target_app = request.target.as_ref().map(TargetApp::display_name),
        );

        let sticky = request.direct_mode;
        let report = async {
            let target = self.prepare_target(request.target.as_ref(), sticky).await;

            let report = match (request.entry.content(), sticky) {
                (ClipboardContent::Text(text), true) => self.insert_directly(text).await,
                (ClipboardContent::Image(_), true) => {
                    info!("Images need the clipboard, using clipboard mode");
                    self.paste_via_clipboard(request.entry.content(), target).await
                }
                (content, false) => self.paste_via_clipboard(content, target).await,
            };

            if report.delivered() {
                info!(
                    delivered_by = ?report.delivered_by,
                    behavior = ?report.behavior,
                    link_converted = report.link_converted,
                    "Paste delivered"
                );
            } else {
                warn!(mode = ?report.mode, "Paste not delivered, every strategy failed");
            }

            sleep(self.timings.release(target.is_some())).await;
            report
        }
        .instrument(span)
        .await;

        drop(guard);

        if sticky {
            self.schedule_focus_return();
        }

        Ok(report)
    }

    /// Wait for the history view to get out of the way, then activate the
    /// target. Returns the target only if it is another application.
    async fn prepare_target<'a>(
        &self,
        target: Option<&'a TargetApp>,
        sticky: bool,
    ) -> Option<&'a TargetApp> {
        sleep(self.timings.pre_activation(sticky)).await;

        let target = target.filter(|app| !app.is_current_process())?;

        debug!(app = target.display_name(), "Activating target application");
        if let Err(err) = self.foreground.activate(target).await {
            warn!(error = %err, app = target.display_name(), "Target activation failed");
        }
        sleep(self.timings.activation(sticky)).await;
        Some(target)
    }

    async fn paste_via_clipboard(
        &self,
        content: &ClipboardContent,
        target: Option<&TargetApp>,
    ) -> PasteReport {
        let mut report = PasteReport::new(DeliveryMode::Clipboard);

        self.change_origin.begin_local_write().await;
        let written = self.clipboard.write(content).await;
        self.change_origin
            .finish_local_write(written.as_ref().ok().copied())
            .await;
        match written {
            Ok(token) => debug!(%token, bytes = content.size_bytes(), "Wrote clipboard"),
            Err(err) => {
                warn!(error = %err, "Failed to write clipboard, aborting paste");
                return report;
            }
        }

        if !self.permission.is_granted().await {
            info!("Injection permission missing, requesting it");
            self.permission.request().await;
        }

        sleep(self.timings.clipboard_settle()).await;

        let app_identifier = target.and_then(|app| app.bundle_id.as_deref());
        let mut behavior = self
            .resolver
            .resolve(app_identifier, self.page_urls.as_ref())
            .await;

        let clipboard_text = match content {
            ClipboardContent::Text(text) => match self.clipboard.read_text().await {
                Ok(Some(current)) => Some(current),
                Ok(None) => None,
                Err(err) => {
                    debug!(error = %err, "Clipboard read-back failed, using entry text");
                    Some(text.clone())
                }
            },
            ClipboardContent::Image(_) => None,
        };

        if behavior == PasteBehavior::LinkConversion
            && !clipboard_text.as_deref().is_some_and(is_web_link)
        {
            debug!("Clipboard is not a link, using normal paste");
            behavior = PasteBehavior::Normal;
        }
        report.behavior = behavior;

        for strategy in &self.strategies {
            match strategy.attempt(clipboard_text.as_deref()).await {
                Ok(()) => {
                    report.delivered_by = Some(strategy.kind());
                    break;
                }
                Err(err) => {
                    debug!(strategy = ?strategy.kind(), error = %err, "Delivery strategy failed");
                }
            }
        }

        if report.delivered() && behavior == PasteBehavior::LinkConversion {
            if let Some(url) = clipboard_text.as_deref() {
                report.link_converted = self.convert_to_link(url).await;
            }
        }

        report
    }

    fn schedule_focus_return(&self) {
        let view = self.history_view.clone();
        let delay = self.timings.sticky_focus_return();
        tokio::spawn(
            async move {
                sleep(delay).await;
                view.bring_to_front().await;
            }
            .instrument(info_span!("usecase.paste.focus_return")),
        );
    }
}
