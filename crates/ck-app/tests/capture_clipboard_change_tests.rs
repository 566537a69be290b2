mod support;

use std::sync::Arc;
use std::time::Duration;

use ck_app::usecases::{CaptureClipboardChange, IngestClipboardSample};
use ck_app::{AppDeps, ClipboardHistory, PasteExecutor, PasteRequest};
use ck_core::settings::PrivacySettings;
use ck_core::{Settings, TargetApp};
use support::{deps, DeskConfig, FakeDesk};

fn capture(deps: &AppDeps, history: &ClipboardHistory) -> CaptureClipboardChange {
    CaptureClipboardChange::new(
        deps.clipboard.clone(),
        deps.change_origin.clone(),
        deps.foreground.clone(),
        IngestClipboardSample::new(history.clone(), PrivacySettings::default()),
    )
}

fn texts(history: &ClipboardHistory) -> Vec<String> {
    history
        .snapshot()
        .iter()
        .filter_map(|entry| entry.text().map(str::to_string))
        .collect()
}

fn frontmost(name: &str) -> Option<TargetApp> {
    Some(TargetApp::new(None, Some(name.to_string()), 4242))
}

#[tokio::test]
async fn external_copy_is_recorded_with_source_app() {
    let desk = FakeDesk::new(DeskConfig {
        frontmost: frontmost("Notes"),
        ..Default::default()
    });
    let deps = deps(&desk, Settings::default());
    let history = ClipboardHistory::new(10);
    let capture = capture(&deps, &history);

    desk.external_copy("meeting at noon");
    let entry = capture.execute().await.unwrap().unwrap();

    assert_eq!(entry.text(), Some("meeting at noon"));
    assert_eq!(entry.source_app(), Some("Notes"));
    assert!(!entry.is_password());
}

#[tokio::test]
async fn unchanged_token_is_ignored() {
    let desk = FakeDesk::new(DeskConfig::default());
    let deps = deps(&desk, Settings::default());
    let history = ClipboardHistory::new(10);
    let capture = capture(&deps, &history);

    desk.external_copy("once");
    capture.execute().await.unwrap();
    assert!(capture.execute().await.unwrap().is_none());
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn prime_skips_existing_clipboard_contents() {
    let desk = FakeDesk::new(DeskConfig::default());
    desk.external_copy("left over from before launch");
    let deps = deps(&desk, Settings::default());
    let history = ClipboardHistory::new(10);
    let capture = capture(&deps, &history);

    capture.prime().await.unwrap();

    assert!(capture.execute().await.unwrap().is_none());
    assert!(history.is_empty());
}

#[tokio::test]
async fn copies_from_password_managers_are_flagged() {
    let desk = FakeDesk::new(DeskConfig {
        frontmost: frontmost("Bitwarden"),
        ..Default::default()
    });
    let deps = deps(&desk, Settings::default());
    let history = ClipboardHistory::new(10);
    let capture = capture(&deps, &history);

    desk.external_copy("correct horse battery staple");
    let entry = capture.execute().await.unwrap().unwrap();

    assert!(entry.is_password());
}

#[tokio::test(start_paused = true)]
async fn pasted_content_is_not_recorded_again() {
    let desk = FakeDesk::new(DeskConfig::default());
    let deps = deps(&desk, Settings::default());
    let history = ClipboardHistory::new(10);
    let capture = capture(&deps, &history);
    let executor = PasteExecutor::new(&deps);

    history.add_text("older", None, false);
    history.add_text("newer", None, false);
    let older = history.at_position(2).unwrap();

    executor.paste(PasteRequest::new(older)).await.unwrap();

    assert!(capture.execute().await.unwrap().is_none());
    assert_eq!(texts(&history), vec!["newer", "older"]);

    // The next outside copy is still picked up.
    desk.external_copy("fresh");
    assert!(capture.execute().await.unwrap().is_some());
    assert_eq!(texts(&history), vec!["fresh", "newer", "older"]);
}

#[tokio::test(start_paused = true)]
async fn fast_polling_during_slow_write_keeps_history_order() {
    let desk = FakeDesk::new(DeskConfig {
        write_latency: Duration::from_millis(50),
        ..Default::default()
    });
    let mut settings = Settings::default();
    settings.history.poll_interval_ms = 1;
    let deps = deps(&desk, settings);
    let history = ClipboardHistory::new(10);
    let capture = Arc::new(capture(&deps, &history));
    let executor = PasteExecutor::new(&deps);

    history.add_text("first", None, false);
    history.add_text("second", None, false);
    let first = history.at_position(2).unwrap();

    let poller = {
        let capture = capture.clone();
        let interval = deps.settings.history.poll_interval();
        tokio::spawn(async move {
            loop {
                let _ = capture.execute().await;
                tokio::time::sleep(interval).await;
            }
        })
    };

    executor.paste(PasteRequest::new(first)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    poller.abort();

    assert_eq!(texts(&history), vec!["second", "first"]);
}

#[tokio::test(start_paused = true)]
async fn paste_landing_while_sampling_is_not_recorded() {
    let desk = FakeDesk::new(DeskConfig {
        token_read_latency: Duration::from_millis(5),
        ..Default::default()
    });
    let deps = deps(&desk, Settings::default());
    let history = ClipboardHistory::new(10);
    let capture = capture(&deps, &history);
    let executor = PasteExecutor::new(&deps);

    history.add_text("first", None, false);
    history.add_text("second", None, false);
    let first = history.at_position(2).unwrap();
    capture.prime().await.unwrap();

    // The paste writes 200ms in. The check below reads the token at 197ms
    // and classifies it after the paste has replaced the contents.
    let paste = executor.paste(PasteRequest::new(first.clone()));
    let check = async {
        tokio::time::sleep(Duration::from_millis(197)).await;
        desk.external_copy("external");
        capture.execute().await.unwrap()
    };
    let (pasted, checked) = tokio::join!(paste, check);

    pasted.unwrap();
    assert!(checked.is_none());
    assert!(capture.execute().await.unwrap().is_none());
    assert_eq!(texts(&history), vec!["second", "first"]);
    assert_eq!(history.at_position(2).unwrap().id(), first.id());
}

#[tokio::test]
async fn failed_read_is_retried_on_next_check() {
    let desk = FakeDesk::new(DeskConfig {
        fail_clipboard_read: true,
        ..Default::default()
    });
    let deps = deps(&desk, Settings::default());
    let history = ClipboardHistory::new(10);
    let capture = capture(&deps, &history);

    desk.external_copy("copied during a hiccup");
    assert!(capture.execute().await.is_err());

    desk.config.lock().unwrap().fail_clipboard_read = false;
    let entry = capture.execute().await.unwrap().unwrap();

    assert_eq!(entry.text(), Some("copied during a hiccup"));
}
