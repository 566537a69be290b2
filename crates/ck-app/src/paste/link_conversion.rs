use ck_core::paste::{EditingShortcut, ScriptCommand};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::executor::PasteExecutor;

impl PasteExecutor {
    /// Select the URL that was just pasted and invoke the editor's link command.
    ///
    /// Both steps try the scripting layer first and fall back to synthetic keys.
    /// Returns `true` once the link command reached the application.
    pub(super) async fn convert_to_link(&self, url: &str) -> bool {
        sleep(self.timings.link_conversion_lead()).await;

        let count = url.trim().chars().count();
        debug!(count, "Selecting pasted link");
        if let Err(err) = self
            .scripts
            .run(ScriptCommand::SelectPreviousCharacters(count))
            .await
        {
            debug!(error = %err, "Scripted selection failed, using key events");
            self.select_with_keys(count).await;
        }

        sleep(self.timings.selection_to_link()).await;

        if let Err(err) = self.scripts.run(ScriptCommand::ConvertSelectionToLink).await {
            debug!(error = %err, "Scripted link command failed, using key events");
            if let Err(err) = self
                .keys
                .send_shortcut(EditingShortcut::ConvertSelectionToLink)
                .await
            {
                warn!(error = %err, "Link command could not be sent");
                return false;
            }
        }
        info!("Link conversion sent");
        true
    }

    async fn select_with_keys(&self, count: usize) {
        for _ in 0..count {
            if let Err(err) = self
                .keys
                .send_shortcut(EditingShortcut::SelectPreviousCharacter)
                .await
            {
                warn!(error = %err, "Selection key event failed");
                return;
            }
            sleep(self.timings.selection_step()).await;
        }
    }
}
