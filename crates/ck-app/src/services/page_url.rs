use std::sync::Arc;

use async_trait::async_trait;
use ck_core::paste::{KnownBrowser, ScriptCommand};
use ck_core::ports::{PageUrlPort, ScriptRunnerPort};
use tracing::debug;

/// Reads the front page URL of known browsers through the script runner.
pub struct ScriptedPageUrlProvider {
    scripts: Arc<dyn ScriptRunnerPort>,
}

impl ScriptedPageUrlProvider {
    pub fn new(scripts: Arc<dyn ScriptRunnerPort>) -> Self {
        Self { scripts }
    }
}

#[async_trait]
impl PageUrlPort for ScriptedPageUrlProvider {
    async fn front_page_url(&self, app_identifier: &str) -> Option<String> {
        let browser = KnownBrowser::from_bundle_id(app_identifier)?;

        match self.scripts.run(ScriptCommand::FrontPageUrl(browser)).await {
            Ok(url) => url.filter(|url| !url.is_empty()),
            Err(err) => {
                debug!(error = %err, browser = browser.app_name(), "Page URL query failed");
                None
            }
        }
    }
}
