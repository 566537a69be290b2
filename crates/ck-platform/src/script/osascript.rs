use async_trait::async_trait;
use ck_core::paste::ScriptCommand;
use ck_core::ports::{CapabilityError, ScriptRunnerPort};
use tokio::process::Command;
use tracing::{debug, debug_span, Instrument};

use super::applescript::render;

/// Runs AppleScript through the `osascript` binary.
#[derive(Debug, Clone)]
pub struct OsaScriptRunner {
    program: String,
}

impl Default for OsaScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl OsaScriptRunner {
    pub fn new() -> Self {
        Self::with_program("osascript")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn execute(&self, script: &str) -> Result<Option<String>, CapabilityError> {
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(script)
            .output()
            .await
            .map_err(|err| {
                CapabilityError::ScriptFailed(format!("failed to start {}: {err}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CapabilityError::ScriptFailed(stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!stdout.is_empty()).then_some(stdout))
    }
}

#[async_trait]
impl ScriptRunnerPort for OsaScriptRunner {
    async fn run(&self, command: ScriptCommand) -> Result<Option<String>, CapabilityError> {
        let span = debug_span!("platform.script.run", ?command);
        async {
            let result = self.execute(&render(command)).await;
            if let Err(err) = &result {
                debug!(error = %err, "Script failed");
            }
            result
        }
        .instrument(span)
        .await
    }
}
