pub mod capture_clipboard_change;
pub mod clear_history;
pub mod ingest_clipboard_sample;
pub mod list_entry_previews;
pub mod paste_history_entry;

pub use capture_clipboard_change::CaptureClipboardChange;
pub use clear_history::ClearHistory;
pub use ingest_clipboard_sample::IngestClipboardSample;
pub use list_entry_previews::ListEntryPreviews;
pub use paste_history_entry::{PasteHistoryEntry, PasteHistoryEntryError};
