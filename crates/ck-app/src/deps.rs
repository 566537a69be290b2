//! # Application Dependencies / 应用依赖
//!
//! Groups every port the use cases need. This is NOT a Builder: there are
//! no build steps, no defaults and no hidden logic. The bootstrap layer fills
//! it in once and hands it to the runtime.
//! 仅用于参数打包。

use std::sync::Arc;

use ck_core::ports::*;
use ck_core::Settings;

pub struct AppDeps {
    // Clipboard dependencies / 剪贴板依赖
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub change_origin: Arc<dyn ClipboardChangeOriginPort>,

    // Injection dependencies / 注入依赖
    pub permission: Arc<dyn InjectionPermissionPort>,
    pub focused_control: Arc<dyn FocusedControlPort>,
    pub key_events: Arc<dyn KeyEventPort>,
    pub scripts: Arc<dyn ScriptRunnerPort>,

    // Application dependencies / 应用依赖
    pub foreground: Arc<dyn ForegroundAppPort>,
    pub history_view: Arc<dyn HistoryViewPort>,

    // Settings / 设置
    pub settings: Settings,
}
