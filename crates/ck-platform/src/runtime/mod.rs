mod polling;

pub use polling::{ClipboardCheck, PollingClipboardRuntime};
