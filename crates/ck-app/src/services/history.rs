use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ck_core::{ClipboardEntry, EntryId, HistoryBuffer};

/// Shared handle to the process-wide history buffer.
///
/// Cloning is cheap; all clones see the same buffer. Each call takes the lock
/// once, so a mutation is never observed half-applied by a reader.
#[derive(Debug, Clone)]
pub struct ClipboardHistory {
    inner: Arc<RwLock<HistoryBuffer>>,
}

impl ClipboardHistory {
    pub fn new(capacity: usize) -> Self {
        Self::from_buffer(HistoryBuffer::new(capacity))
    }

    pub fn from_buffer(buffer: HistoryBuffer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(buffer)),
        }
    }

    // A panic while holding the lock cannot leave the buffer inconsistent:
    // every mutation completes before it returns. Recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, HistoryBuffer> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HistoryBuffer> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_text(
        &self,
        text: &str,
        source_app: Option<String>,
        is_password: bool,
    ) -> Option<ClipboardEntry> {
        self.write().add_text(text, source_app, is_password)
    }

    pub fn add_image_data(
        &self,
        bytes: Vec<u8>,
        source_app: Option<String>,
    ) -> Option<ClipboardEntry> {
        self.write().add_image_data(bytes, source_app)
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    /// Copy of all entries, most recent first.
    pub fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.read().items().cloned().collect()
    }

    pub fn get(&self, id: &EntryId) -> Option<ClipboardEntry> {
        self.read().get(id).cloned()
    }

    /// 1-based position lookup, matching number-key quick select.
    pub fn at_position(&self, position: usize) -> Option<ClipboardEntry> {
        let index = position.checked_sub(1)?;
        self.read().nth(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }
}
