mod clipboard_sample;
mod entry_preview;

pub use clipboard_sample::ClipboardSample;
pub use entry_preview::EntryPreview;
