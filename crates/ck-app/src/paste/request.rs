use ck_core::{ClipboardEntry, TargetApp};

/// One paste request. Transient, never stored.
#[derive(Debug, Clone)]
pub struct PasteRequest {
    pub entry: ClipboardEntry,
    /// Application that held focus before the history view opened.
    pub target: Option<TargetApp>,
    /// Sticky mode: insert at the end of the focused control without touching
    /// the clipboard.
    pub direct_mode: bool,
}

impl PasteRequest {
    pub fn new(entry: ClipboardEntry) -> Self {
        Self {
            entry,
            target: None,
            direct_mode: false,
        }
    }

    pub fn with_target(mut self, target: Option<TargetApp>) -> Self {
        self.target = target;
        self
    }

    pub fn direct(mut self, direct_mode: bool) -> Self {
        self.direct_mode = direct_mode;
        self
    }
}
