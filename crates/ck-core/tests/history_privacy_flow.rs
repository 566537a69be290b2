use ck_core::clipboard::MASKED_PREVIEW;
use ck_core::{is_likely_password, ClipboardContent, HistoryBuffer, PrivacyView};

fn ingest(buffer: &mut HistoryBuffer, text: &str) {
    buffer.add_text(text, Some("Terminal".into()), is_likely_password(text));
}

#[test]
fn copied_secret_is_masked_in_previews_but_kept_in_full() {
    let mut buffer = HistoryBuffer::new(5);
    ingest(&mut buffer, "git status");
    ingest(&mut buffer, "Tr0ub4dor&3");

    let masked = PrivacyView { mask_passwords: true };
    let previews: Vec<_> = buffer.items().map(|entry| masked.preview(entry)).collect();
    assert_eq!(previews, vec![MASKED_PREVIEW.to_string(), "git status".to_string()]);

    let secret = buffer.nth(0).unwrap();
    assert_eq!(secret.text(), Some("Tr0ub4dor&3"));
    assert_eq!(
        masked.masked_content(secret),
        ClipboardContent::Text("•".repeat(11))
    );

    let open = PrivacyView { mask_passwords: false };
    assert_eq!(open.preview(secret), "Tr0ub4dor&3");
}

#[test]
fn urls_are_recorded_in_the_clear() {
    let mut buffer = HistoryBuffer::new(5);
    ingest(&mut buffer, "https://Example.com/Path?token=A1b2C3d4");

    let view = PrivacyView { mask_passwords: true };
    let entry = buffer.nth(0).unwrap();
    assert!(!entry.is_password());
    assert_eq!(view.preview(entry), "https://Example.com/Path?token=A1b2C3d4");
}

#[test]
fn multiline_copy_previews_first_line() {
    let mut buffer = HistoryBuffer::new(5);
    ingest(&mut buffer, "\n  fn main() {\n    println!(\"hi\");\n}\n");

    let view = PrivacyView { mask_passwords: true };
    assert_eq!(view.preview(buffer.nth(0).unwrap()), "fn main() {");
}
