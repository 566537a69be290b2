//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create platform implementations for the current OS / 创建当前平台的实现
//! - ✅ Bundle them into [`AppDeps`] / 打包为 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > This is the only place allowed to depend on ck-platform and ck-app together.
//! > 这是唯一允许同时依赖 ck-platform 和 ck-app 的地方。

use std::sync::Arc;

use ck_app::services::InMemoryClipboardChangeOrigin;
use ck_app::AppDeps;
use ck_core::ports::HistoryViewPort;
use ck_core::Settings;
use ck_platform::accessibility::{LocalFocusedControl, LocalPermission};
use ck_platform::clipboard::LocalClipboard;
use ck_platform::foreground::LocalForegroundApp;
use ck_platform::input::LocalKeyEvents;
use ck_platform::script::LocalScriptRunner;

/// Errors during dependency injection
/// 依赖注入错误（平台初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Build the application dependencies from platform adapters.
///
/// `history_view` is supplied by the frontend, which owns the view that
/// sticky-mode pastes return focus to.
pub fn wire_dependencies(
    settings: Settings,
    history_view: Arc<dyn HistoryViewPort>,
) -> Result<AppDeps, WiringError> {
    let clipboard =
        LocalClipboard::new().map_err(|err| WiringError::ClipboardInit(format!("{err:#}")))?;

    Ok(AppDeps {
        clipboard: Arc::new(clipboard),
        change_origin: Arc::new(InMemoryClipboardChangeOrigin::new()),
        permission: Arc::new(LocalPermission::default()),
        focused_control: Arc::new(LocalFocusedControl::default()),
        key_events: Arc::new(LocalKeyEvents::default()),
        scripts: Arc::new(LocalScriptRunner::default()),
        foreground: Arc::new(LocalForegroundApp::default()),
        history_view,
        settings,
    })
}
