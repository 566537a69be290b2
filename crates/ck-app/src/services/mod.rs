//! Shared in-process services injected into use cases.

mod change_origin;
mod history;
mod page_url;

pub use change_origin::InMemoryClipboardChangeOrigin;
pub use history::ClipboardHistory;
pub use page_url::ScriptedPageUrlProvider;
