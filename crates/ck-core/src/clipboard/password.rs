//! Heuristic detection of password-like clipboard text.

const MIN_LEN: usize = 8;
const MAX_LEN: usize = 128;
const REQUIRED_CLASSES: usize = 3;

/// Returns `true` when `text` looks like a generated or typed secret.
///
/// Links are never treated as passwords. Otherwise the text must be 8–128
/// characters long, contain neither a space nor a line feed, and mix at least
/// three of: ASCII uppercase, ASCII lowercase, ASCII digits, anything else.
///
/// The character checks run on the text as copied, not the trimmed form.
pub fn is_likely_password(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return false;
    }

    let len = text.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) || text.contains(' ') || text.contains('\n') {
        return false;
    }

    let classes = [
        text.chars().any(|c| c.is_ascii_uppercase()),
        text.chars().any(|c| c.is_ascii_lowercase()),
        text.chars().any(|c| c.is_ascii_digit()),
        text.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    classes.iter().filter(|present| **present).count() >= REQUIRED_CLASSES
}
