//! Entry points for the CLI subcommands.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use ck_core::paste::BehaviorResolver;
use ck_core::ports::PageUrlPort;
use ck_core::{is_likely_password, HistoryBuffer, PasteBehavior, PrivacyView, Settings};
use tokio::io::BufReader;

use super::runtime::AppRuntime;
use super::wiring::wire_dependencies;
use crate::console::{run_console, ConsoleHistoryView};

/// `clipkeep run`: wire the local platform and hand stdin/stdout to the console.
pub async fn run_app(settings: Settings) -> Result<()> {
    let view = ConsoleHistoryView::new();
    let refresh = view.refresh_signal();
    let deps = wire_dependencies(settings, Arc::new(view))?;
    let runtime = AppRuntime::new(deps);

    run_console(
        &runtime,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        refresh,
    )
    .await
}

/// `clipkeep classify`: the verdict and the list preview for `text`.
pub fn classify(text: &str, settings: &Settings) -> String {
    let is_password = is_likely_password(text);
    let mut buffer = HistoryBuffer::new(1);
    let preview = match buffer.add_text(text, None, is_password) {
        Some(entry) => PrivacyView::new(settings.privacy.mask_passwords).preview(&entry),
        None => String::new(),
    };
    let verdict = if is_password { "password" } else { "not a password" };
    format!("{verdict}\npreview: {preview}")
}

/// `clipkeep resolve`: the behavior a paste into `app` would get, assuming the
/// browser shows `url`.
pub async fn resolve(settings: &Settings, app: &str, url: Option<String>) -> PasteBehavior {
    BehaviorResolver::new(settings.paste.behaviors.clone())
        .resolve(Some(app), &AssumedPageUrl(url))
        .await
}

struct AssumedPageUrl(Option<String>);

#[async_trait]
impl PageUrlPort for AssumedPageUrl {
    async fn front_page_url(&self, _app_identifier: &str) -> Option<String> {
        self.0.clone()
    }
}
