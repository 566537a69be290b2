use chrono::{DateTime, Utc};
use ck_core::{ClipboardEntry, ContentKind, EntryId, PrivacyView};
use serde::Serialize;

/// List-row projection of a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPreview {
    pub id: EntryId,
    /// 1-based position in the list.
    pub position: usize,
    pub kind: ContentKind,
    pub preview: String,
    pub created_at: DateTime<Utc>,
    pub source_app: Option<String>,
    pub is_password: bool,
}

impl EntryPreview {
    pub fn project(entry: &ClipboardEntry, position: usize, view: PrivacyView) -> Self {
        Self {
            id: entry.id().clone(),
            position,
            kind: entry.content().kind(),
            preview: view.preview(entry),
            created_at: entry.created_at(),
            source_app: entry.source_app().map(str::to_string),
            is_password: entry.is_password(),
        }
    }
}
