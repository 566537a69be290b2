use tracing::info;

use crate::services::ClipboardHistory;

/// Removes every history entry.
pub struct ClearHistory {
    history: ClipboardHistory,
}

impl ClearHistory {
    pub fn new(history: ClipboardHistory) -> Self {
        Self { history }
    }

    pub fn execute(&self) {
        let removed = self.history.len();
        self.history.clear();
        info!(removed, "Cleared clipboard history");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_all_entries() {
        let history = ClipboardHistory::new(5);
        history.add_text("a", None, false);
        history.add_image_data(vec![1], None);

        ClearHistory::new(history.clone()).execute();

        assert!(history.is_empty());
    }
}
