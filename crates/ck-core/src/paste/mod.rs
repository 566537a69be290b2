//! Paste delivery domain: per-application behaviors, the command vocabulary
//! the pipeline speaks to capability providers, and text splicing.

mod behavior;
mod command;
mod resolver;
mod splice;
mod target;

pub use behavior::{AppPasteBehavior, AppPasteBehaviors, PasteBehavior};
pub use command::{EditingShortcut, KnownBrowser, ScriptCommand};
pub use resolver::{is_web_link, BehaviorResolver};
pub use splice::{splice_at_caret, utf16_len, SplicedText, TextRange};
pub use target::TargetApp;
