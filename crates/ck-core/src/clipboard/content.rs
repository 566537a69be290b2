use serde::{Deserialize, Serialize};

/// Payload carried by a history entry.
#[derive(Clone, PartialEq, Eq)]
pub enum ClipboardContent {
    Text(String),
    /// Encoded image bytes as produced by the clipboard adapter.
    Image(Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Image,
}

impl ClipboardContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            ClipboardContent::Text(_) => ContentKind::Text,
            ClipboardContent::Image(_) => ContentKind::Image,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ClipboardContent::Text(text) => Some(text),
            ClipboardContent::Image(_) => None,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ClipboardContent::Image(_))
    }

    /// Size of the payload in bytes.
    pub fn size_bytes(&self) -> usize {
        match self {
            ClipboardContent::Text(text) => text.len(),
            ClipboardContent::Image(bytes) => bytes.len(),
        }
    }
}

// Clipboard payloads may be secrets, keep them out of debug output.
impl std::fmt::Debug for ClipboardContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardContent::Text(text) => f
                .debug_struct("Text")
                .field("chars", &text.chars().count())
                .finish(),
            ClipboardContent::Image(bytes) => f
                .debug_struct("Image")
                .field("bytes", &bytes.len())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_text() {
        let content = ClipboardContent::Text("hunter2hunter2".to_string());
        let rendered = format!("{content:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("14"));
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(ClipboardContent::Text("a".into()).kind(), ContentKind::Text);
        assert_eq!(ClipboardContent::Image(vec![1]).kind(), ContentKind::Image);
        assert!(ClipboardContent::Image(vec![1]).as_text().is_none());
    }
}
