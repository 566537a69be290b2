//! AppleScript source for each [`ScriptCommand`].

use ck_core::paste::{KnownBrowser, ScriptCommand};

const LEFT_ARROW_KEY_CODE: u8 = 123;

pub fn render(command: ScriptCommand) -> String {
    match command {
        ScriptCommand::Paste => {
            r#"tell application "System Events" to keystroke "v" using command down"#.to_string()
        }
        ScriptCommand::SelectPreviousCharacters(count) => format!(
            "tell application \"System Events\"\n\
             \tkey down shift\n\
             \trepeat {count} times\n\
             \t\tkey code {LEFT_ARROW_KEY_CODE}\n\
             \tend repeat\n\
             \tkey up shift\n\
             end tell"
        ),
        ScriptCommand::ConvertSelectionToLink => {
            r#"tell application "System Events" to keystroke "k" using command down"#.to_string()
        }
        ScriptCommand::FrontPageUrl(browser) => front_page_url(browser),
    }
}

fn front_page_url(browser: KnownBrowser) -> String {
    let app = browser.app_name();
    let (guard, query) = match browser {
        KnownBrowser::Chrome => ("count of windows", "URL of active tab of front window"),
        KnownBrowser::Safari => ("count of documents", "URL of front document"),
        KnownBrowser::Firefox => ("count of windows", "URL of front window"),
    };
    format!(
        "tell application \"{app}\"\n\
         \tif ({guard}) > 0 then\n\
         \t\treturn {query}\n\
         \tend if\n\
         end tell"
    )
}
