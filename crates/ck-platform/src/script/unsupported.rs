use async_trait::async_trait;
use ck_core::paste::ScriptCommand;
use ck_core::ports::{CapabilityError, ScriptRunnerPort};

/// Platforms without an automation scripting layer.
#[derive(Debug, Default)]
pub struct UnsupportedScriptRunner;

#[async_trait]
impl ScriptRunnerPort for UnsupportedScriptRunner {
    async fn run(&self, _command: ScriptCommand) -> Result<Option<String>, CapabilityError> {
        Err(CapabilityError::Unsupported("automation scripts"))
    }
}
