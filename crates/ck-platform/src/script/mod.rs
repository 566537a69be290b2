//! OS automation scripts.

mod applescript;
mod osascript;
mod unsupported;

pub use applescript::render;
pub use osascript::OsaScriptRunner;
pub use unsupported::UnsupportedScriptRunner;

#[cfg(target_os = "macos")]
pub use osascript::OsaScriptRunner as LocalScriptRunner;
#[cfg(not(target_os = "macos"))]
pub use unsupported::UnsupportedScriptRunner as LocalScriptRunner;
