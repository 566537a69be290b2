//! Port interfaces for the application layer
//!
//! Ports define the contract between the paste pipeline, the clipboard
//! poller and the operating system. Use cases depend on these traits only;
//! `ck-platform` provides the implementations.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs here when it represents an OS capability that more than one
//! use case relies on. Helpers used by a single use case live next to it.

mod change_origin;
mod clipboard;
mod errors;
mod focused_control;
mod foreground;
mod input;
mod permission;
mod script;

pub use change_origin::{ChangeOrigin, ClipboardChangeOriginPort};
pub use clipboard::{ChangeToken, SystemClipboardPort};
pub use errors::CapabilityError;
pub use focused_control::{FocusedControlPort, FocusedText};
pub use foreground::{ForegroundAppPort, HistoryViewPort, PageUrlPort};
pub use input::KeyEventPort;
pub use permission::InjectionPermissionPort;
pub use script::ScriptRunnerPort;

#[cfg(test)]
pub(crate) use foreground::MockPageUrl;
