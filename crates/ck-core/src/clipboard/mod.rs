//! Clipboard history engine.
//!
//! 剪贴板历史引擎：条目模型、有界去重缓冲区、密码启发式与隐私视图。

mod content;
mod entry;
mod history;
mod password;
mod privacy;

pub use content::{ClipboardContent, ContentKind};
pub use entry::ClipboardEntry;
pub use history::{HistoryBuffer, DEFAULT_CAPACITY};
pub use password::is_likely_password;
pub use privacy::{PrivacyView, MASKED_PREVIEW, PREVIEW_MAX_CHARS};
