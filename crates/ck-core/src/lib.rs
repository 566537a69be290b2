//! # ck-core
//!
//! Core domain models and business logic for ClipKeep.
//!
//! This crate holds the clipboard history engine, the password heuristic, the
//! privacy projection and the paste behavior rules. Everything that touches the
//! operating system is expressed as a port in [`ports`].

pub mod clipboard;
pub mod ids;
pub mod paste;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use clipboard::{
    is_likely_password, ClipboardContent, ClipboardEntry, ContentKind, HistoryBuffer,
    PrivacyView,
};
pub use ids::EntryId;
pub use paste::{AppPasteBehavior, AppPasteBehaviors, PasteBehavior, TargetApp};
pub use settings::Settings;
