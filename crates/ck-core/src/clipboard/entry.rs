use chrono::{DateTime, Utc};

use super::content::ClipboardContent;
use crate::ids::EntryId;

/// A single item in the clipboard history.
///
/// Entries are only created by [`HistoryBuffer`](super::HistoryBuffer) and are
/// immutable afterwards. Everything outside the buffer works on clones.
///
/// 历史条目只能由 `HistoryBuffer` 创建，创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    id: EntryId,
    content: ClipboardContent,
    created_at: DateTime<Utc>,
    source_app: Option<String>,
    is_password: bool,
}

impl ClipboardEntry {
    pub(crate) fn new(
        content: ClipboardContent,
        source_app: Option<String>,
        is_password: bool,
    ) -> Self {
        Self {
            id: EntryId::new(),
            content,
            created_at: Utc::now(),
            source_app,
            is_password,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn content(&self) -> &ClipboardContent {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn source_app(&self) -> Option<&str> {
        self.source_app.as_deref()
    }

    pub fn is_password(&self) -> bool {
        self.is_password
    }

    pub fn text(&self) -> Option<&str> {
        self.content.as_text()
    }
}
