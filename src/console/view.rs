use std::sync::Arc;

use async_trait::async_trait;
use ck_core::ports::HistoryViewPort;
use tokio::sync::Notify;

/// History view of the console frontend. Bringing it to front re-renders
/// the list.
#[derive(Debug, Clone, Default)]
pub struct ConsoleHistoryView {
    refresh: Arc<Notify>,
}

impl ConsoleHistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_signal(&self) -> Arc<Notify> {
        self.refresh.clone()
    }
}

#[async_trait]
impl HistoryViewPort for ConsoleHistoryView {
    async fn bring_to_front(&self) {
        self.refresh.notify_one();
    }
}
