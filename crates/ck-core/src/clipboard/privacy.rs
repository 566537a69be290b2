//! Display projections that hide password entries.
//!
//! Masking only changes what is shown. Paste delivery always uses the real
//! content of an entry.

use super::content::ClipboardContent;
use super::entry::ClipboardEntry;

pub const MASKED_PREVIEW: &str = "••••••••";
pub const PREVIEW_MAX_CHARS: usize = 100;
pub const IMAGE_PREVIEW: &str = "Image";

const MASK_CHAR: char = '•';
const MASK_MAX_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacyView {
    pub mask_passwords: bool,
}

impl PrivacyView {
    pub fn new(mask_passwords: bool) -> Self {
        Self { mask_passwords }
    }

    fn masks(&self, entry: &ClipboardEntry) -> bool {
        self.mask_passwords && entry.is_password()
    }

    /// One-line summary of an entry for list rendering.
    pub fn preview(&self, entry: &ClipboardEntry) -> String {
        match entry.content() {
            ClipboardContent::Text(_) if self.masks(entry) => MASKED_PREVIEW.to_string(),
            ClipboardContent::Text(text) => {
                let first_line = text.split(is_line_break).next().unwrap_or_default();
                first_line.chars().take(PREVIEW_MAX_CHARS).collect()
            }
            ClipboardContent::Image(_) => IMAGE_PREVIEW.to_string(),
        }
    }

    /// Content as it may be displayed in full.
    pub fn masked_content(&self, entry: &ClipboardEntry) -> ClipboardContent {
        match entry.content() {
            ClipboardContent::Text(text) if self.masks(entry) => {
                let len = text.chars().count().min(MASK_MAX_LEN);
                ClipboardContent::Text(std::iter::repeat(MASK_CHAR).take(len).collect())
            }
            content => content.clone(),
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\u{000A}'..='\u{000D}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::HistoryBuffer;

    fn text_entry(text: &str, is_password: bool) -> ClipboardEntry {
        HistoryBuffer::default()
            .add_text(text, None, is_password)
            .unwrap()
    }

    #[test]
    fn long_text_preview_is_truncated() {
        let text: String = ('a'..='z').cycle().take(200).collect();
        let entry = text_entry(&text, false);

        let preview = PrivacyView::new(true).preview(&entry);

        assert_eq!(preview.chars().count(), 100);
        assert_eq!(preview, text.chars().take(100).collect::<String>());
    }

    #[test]
    fn preview_keeps_first_line_only() {
        let entry = text_entry("first line\r\nsecond line", false);
        assert_eq!(PrivacyView::new(false).preview(&entry), "first line");

        let entry = text_entry("para\u{2029}next", false);
        assert_eq!(PrivacyView::new(false).preview(&entry), "para");
    }

    #[test]
    fn masked_password_preview() {
        let entry = text_entry("MyP@ssw0rd123", true);
        assert_eq!(PrivacyView::new(true).preview(&entry), "••••••••");
        assert_eq!(PrivacyView::new(false).preview(&entry), "MyP@ssw0rd123");
    }

    #[test]
    fn masked_content_is_capped_at_twenty() {
        let secret = "x".repeat(50);
        let entry = text_entry(&secret, true);

        let masked = PrivacyView::new(true).masked_content(&entry);
        assert_eq!(masked, ClipboardContent::Text("•".repeat(20)));

        let unmasked = PrivacyView::new(false).masked_content(&entry);
        assert_eq!(unmasked, ClipboardContent::Text(secret));
    }

    #[test]
    fn short_password_mask_matches_length() {
        let entry = text_entry("Ab1!xyzw", true);
        assert_eq!(
            PrivacyView::new(true).masked_content(&entry),
            ClipboardContent::Text("•".repeat(8))
        );
    }

    #[test]
    fn images_are_never_masked() {
        let entry = HistoryBuffer::default()
            .add_image_data(vec![1, 2, 3], None)
            .unwrap();
        let view = PrivacyView::new(true);

        assert_eq!(view.preview(&entry), "Image");
        assert_eq!(view.masked_content(&entry), ClipboardContent::Image(vec![1, 2, 3]));
    }
}
