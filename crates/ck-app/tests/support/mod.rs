//! Recording fake of every OS capability, shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use ck_app::services::InMemoryClipboardChangeOrigin;
use ck_app::AppDeps;
use ck_core::paste::{EditingShortcut, ScriptCommand, TextRange};
use ck_core::ports::*;
use ck_core::{ClipboardContent, Settings, TargetApp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ClipboardWrite(ClipboardContent),
    Activate(i32),
    PermissionRequest,
    SetValue(String),
    SetSelection(TextRange),
    ReplaceSelection(String),
    Script(ScriptCommand),
    Shortcut(EditingShortcut),
    Type(Vec<u16>),
    BringToFront,
}

/// Knobs for the fake. Defaults describe a cooperative desktop with no
/// focused text control.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub permission_granted: bool,
    pub focused: Option<FocusedText>,
    pub fail_scripts: bool,
    pub fail_keys: bool,
    pub fail_clipboard_write: bool,
    pub fail_clipboard_read: bool,
    pub page_url: Option<String>,
    pub frontmost: Option<TargetApp>,
    /// Time the clipboard write takes after the change is visible.
    pub write_latency: Duration,
    /// Time between reading the change token and returning it.
    pub token_read_latency: Duration,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            permission_granted: true,
            focused: None,
            fail_scripts: false,
            fail_keys: false,
            fail_clipboard_write: false,
            fail_clipboard_read: false,
            page_url: None,
            frontmost: None,
            write_latency: Duration::ZERO,
            token_read_latency: Duration::ZERO,
        }
    }
}

#[derive(Default)]
struct ClipboardState {
    token: u64,
    content: Option<ClipboardContent>,
}

pub struct FakeDesk {
    pub config: Mutex<DeskConfig>,
    calls: Mutex<Vec<Call>>,
    clipboard: Mutex<ClipboardState>,
}

impl FakeDesk {
    pub fn new(config: DeskConfig) -> Arc<Self> {
        Arc::new(Self {
            config: Mutex::new(config),
            calls: Mutex::new(Vec::new()),
            clipboard: Mutex::new(ClipboardState::default()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn scripts_run(&self) -> Vec<ScriptCommand> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Script(command) => Some(command),
                _ => None,
            })
            .collect()
    }

    pub fn shortcuts(&self) -> Vec<EditingShortcut> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Shortcut(shortcut) => Some(shortcut),
                _ => None,
            })
            .collect()
    }

    pub fn clipboard_text(&self) -> Option<String> {
        match &self.clipboard.lock().unwrap().content {
            Some(ClipboardContent::Text(text)) => Some(text.clone()),
            _ => None,
        }
    }

    /// Simulate another application copying text.
    pub fn external_copy(&self, text: &str) {
        let mut clipboard = self.clipboard.lock().unwrap();
        clipboard.token += 1;
        clipboard.content = Some(ClipboardContent::Text(text.to_string()));
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn cfg(&self) -> DeskConfig {
        self.config.lock().unwrap().clone()
    }
}

pub fn deps(desk: &Arc<FakeDesk>, settings: Settings) -> AppDeps {
    AppDeps {
        clipboard: desk.clone(),
        change_origin: Arc::new(InMemoryClipboardChangeOrigin::new()),
        permission: desk.clone(),
        focused_control: desk.clone(),
        key_events: desk.clone(),
        scripts: desk.clone(),
        foreground: desk.clone(),
        history_view: desk.clone(),
        settings,
    }
}

pub fn other_app(bundle_id: &str) -> TargetApp {
    TargetApp::new(Some(bundle_id.to_string()), Some("Other".to_string()), 999_999)
}

#[async_trait]
impl SystemClipboardPort for FakeDesk {
    async fn write(&self, content: &ClipboardContent) -> Result<ChangeToken, CapabilityError> {
        let cfg = self.cfg();
        if cfg.fail_clipboard_write {
            return Err(CapabilityError::Other(anyhow::anyhow!("pasteboard locked")));
        }
        self.record(Call::ClipboardWrite(content.clone()));
        let token = {
            let mut clipboard = self.clipboard.lock().unwrap();
            clipboard.token += 1;
            clipboard.content = Some(content.clone());
            clipboard.token
        };
        if !cfg.write_latency.is_zero() {
            tokio::time::sleep(cfg.write_latency).await;
        }
        Ok(ChangeToken(token))
    }

    async fn change_token(&self) -> Result<ChangeToken, CapabilityError> {
        let token = ChangeToken(self.clipboard.lock().unwrap().token);
        let latency = self.cfg().token_read_latency;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        Ok(token)
    }

    async fn read_text(&self) -> Result<Option<String>, CapabilityError> {
        if self.cfg().fail_clipboard_read {
            return Err(CapabilityError::Other(anyhow::anyhow!("pasteboard busy")));
        }
        Ok(self.clipboard_text())
    }

    async fn read_image(&self) -> Result<Option<Vec<u8>>, CapabilityError> {
        match &self.clipboard.lock().unwrap().content {
            Some(ClipboardContent::Image(bytes)) => Ok(Some(bytes.clone())),
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl InjectionPermissionPort for FakeDesk {
    async fn is_granted(&self) -> bool {
        self.cfg().permission_granted
    }

    async fn request(&self) {
        self.record(Call::PermissionRequest);
    }
}

#[async_trait]
impl FocusedControlPort for FakeDesk {
    async fn read_text(&self) -> Result<FocusedText, CapabilityError> {
        self.cfg().focused.ok_or(CapabilityError::NoFocusedElement)
    }

    async fn set_value(&self, value: &str) -> Result<(), CapabilityError> {
        self.record(Call::SetValue(value.to_string()));
        Ok(())
    }

    async fn set_selection(&self, range: TextRange) -> Result<(), CapabilityError> {
        self.record(Call::SetSelection(range));
        Ok(())
    }

    async fn replace_selection(&self, text: &str) -> Result<(), CapabilityError> {
        self.record(Call::ReplaceSelection(text.to_string()));
        Ok(())
    }
}

#[async_trait]
impl KeyEventPort for FakeDesk {
    async fn send_shortcut(&self, shortcut: EditingShortcut) -> Result<(), CapabilityError> {
        if self.cfg().fail_keys {
            return Err(CapabilityError::PermissionDenied);
        }
        self.record(Call::Shortcut(shortcut));
        Ok(())
    }

    async fn type_utf16(&self, units: &[u16]) -> Result<(), CapabilityError> {
        if self.cfg().fail_keys {
            return Err(CapabilityError::PermissionDenied);
        }
        self.record(Call::Type(units.to_vec()));
        Ok(())
    }
}

#[async_trait]
impl ScriptRunnerPort for FakeDesk {
    async fn run(&self, command: ScriptCommand) -> Result<Option<String>, CapabilityError> {
        let cfg = self.cfg();
        if let ScriptCommand::FrontPageUrl(_) = command {
            return Ok(cfg.page_url);
        }
        if cfg.fail_scripts {
            return Err(CapabilityError::ScriptFailed("not authorized".into()));
        }
        self.record(Call::Script(command));
        Ok(None)
    }
}

#[async_trait]
impl ForegroundAppPort for FakeDesk {
    async fn frontmost(&self) -> Result<Option<TargetApp>, CapabilityError> {
        Ok(self.cfg().frontmost)
    }

    async fn activate(&self, app: &TargetApp) -> Result<(), CapabilityError> {
        self.record(Call::Activate(app.pid));
        Ok(())
    }
}

#[async_trait]
impl HistoryViewPort for FakeDesk {
    async fn bring_to_front(&self) {
        self.record(Call::BringToFront);
    }
}
