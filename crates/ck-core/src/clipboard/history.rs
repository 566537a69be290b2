use std::collections::VecDeque;

use super::content::ClipboardContent;
use super::entry::ClipboardEntry;
use crate::ids::EntryId;

pub const DEFAULT_CAPACITY: usize = 50;

/// Bounded, most-recent-first store of clipboard entries.
///
/// ## Invariants / 不变量
/// - `len() <= capacity()`
/// - at most one text entry per distinct trimmed value
/// - at most one image entry in total
/// - front is the most recently inserted entry
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    capacity: usize,
    entries: VecDeque<ClipboardEntry>,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent first.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &ClipboardEntry> + '_ {
        self.entries.iter()
    }

    pub fn get(&self, id: &EntryId) -> Option<&ClipboardEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Zero-based position lookup; 0 is the most recent entry.
    pub fn nth(&self, index: usize) -> Option<&ClipboardEntry> {
        self.entries.get(index)
    }

    /// Record a text sample.
    ///
    /// The text is stored trimmed. Whitespace-only input is ignored and returns
    /// `None`. An existing entry with the same trimmed text is replaced, which
    /// moves the value to the front with a fresh timestamp.
    pub fn add_text(
        &mut self,
        text: &str,
        source_app: Option<String>,
        is_password: bool,
    ) -> Option<ClipboardEntry> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.text() == Some(trimmed))
        {
            self.entries.remove(index);
        }

        let entry = ClipboardEntry::new(
            ClipboardContent::Text(trimmed.to_string()),
            source_app,
            is_password,
        );
        Some(self.push_front(entry))
    }

    /// Record an image sample. Any previous image is dropped, whatever its bytes.
    pub fn add_image_data(
        &mut self,
        bytes: Vec<u8>,
        source_app: Option<String>,
    ) -> Option<ClipboardEntry> {
        if bytes.is_empty() {
            return None;
        }

        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.content().is_image())
        {
            self.entries.remove(index);
        }

        let entry = ClipboardEntry::new(ClipboardContent::Image(bytes), source_app, false);
        Some(self.push_front(entry))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn push_front(&mut self, entry: ClipboardEntry) -> ClipboardEntry {
        self.entries.push_front(entry.clone());
        if self.entries.len() > self.capacity {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                evicted = self.entries.len() - self.capacity,
                capacity = self.capacity,
                "Evicting oldest history entries"
            );
            self.entries.truncate(self.capacity);
        }
        entry
    }
}
