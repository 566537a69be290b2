use ck_core::paste::{KnownBrowser, ScriptCommand, TextRange};
use ck_core::ports::{
    CapabilityError, FocusedControlPort, InjectionPermissionPort, ScriptRunnerPort,
};
use ck_platform::accessibility::{NoPermissionRequired, UnsupportedFocusedControl};
use ck_platform::script::{render, UnsupportedScriptRunner};

#[tokio::test]
async fn focused_control_reports_unsupported() {
    let control = UnsupportedFocusedControl;

    assert!(matches!(
        control.read_text().await,
        Err(CapabilityError::Unsupported(_))
    ));
    assert!(control.set_selection(TextRange::caret(0)).await.is_err());
    assert!(control.replace_selection("x").await.is_err());
}

#[tokio::test]
async fn permission_is_implicitly_granted() {
    assert!(NoPermissionRequired.is_granted().await);
}

#[tokio::test]
async fn scripts_report_unsupported() {
    let runner = UnsupportedScriptRunner;
    for command in [
        ScriptCommand::Paste,
        ScriptCommand::ConvertSelectionToLink,
        ScriptCommand::FrontPageUrl(KnownBrowser::Firefox),
    ] {
        assert!(matches!(
            runner.run(command).await,
            Err(CapabilityError::Unsupported(_))
        ));
    }
}

#[test]
fn every_script_addresses_an_application() {
    for command in [
        ScriptCommand::Paste,
        ScriptCommand::SelectPreviousCharacters(3),
        ScriptCommand::ConvertSelectionToLink,
        ScriptCommand::FrontPageUrl(KnownBrowser::Chrome),
        ScriptCommand::FrontPageUrl(KnownBrowser::Safari),
        ScriptCommand::FrontPageUrl(KnownBrowser::Firefox),
    ] {
        assert!(render(command).starts_with("tell application \""));
    }
}
