use serde::{Deserialize, Serialize};

/// Handle to the application that should receive a paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetApp {
    /// Bundle identifier, absent for some processes.
    pub bundle_id: Option<String>,
    pub name: Option<String>,
    pub pid: i32,
}

impl TargetApp {
    pub fn new(bundle_id: Option<String>, name: Option<String>, pid: i32) -> Self {
        Self {
            bundle_id,
            name,
            pid,
        }
    }

    pub fn is_current_process(&self) -> bool {
        u32::try_from(self.pid).is_ok_and(|pid| pid == std::process::id())
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.bundle_id.as_deref())
            .unwrap_or("<unknown>")
    }
}
