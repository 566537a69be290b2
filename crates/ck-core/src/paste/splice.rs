//! Caret-position text splicing in UTF-16 units.
//!
//! Accessibility APIs report text ranges in UTF-16 code units, so positions
//! here are always UTF-16 offsets.

/// A selection or caret (`length == 0`) inside a text control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    pub location: usize,
    pub length: usize,
}

impl TextRange {
    pub fn caret(location: usize) -> Self {
        Self {
            location,
            length: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplicedText {
    pub value: String,
    /// Caret to set once `value` has been written.
    pub caret: TextRange,
}

pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Insert `inserted` at the start of `selection` without replacing the selected
/// text. The location is clamped to the end of `current`.
pub fn splice_at_caret(current: &str, selection: TextRange, inserted: &str) -> SplicedText {
    let units: Vec<u16> = current.encode_utf16().collect();
    let mut at = selection.location.min(units.len());
    // Never split a surrogate pair.
    if at > 0 && at < units.len() && is_low_surrogate(units[at]) {
        at -= 1;
    }

    let before = String::from_utf16_lossy(&units[..at]);
    let after = String::from_utf16_lossy(&units[at..]);

    SplicedText {
        value: format!("{before}{inserted}{after}"),
        caret: TextRange::caret(at + utf16_len(inserted)),
    }
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}
