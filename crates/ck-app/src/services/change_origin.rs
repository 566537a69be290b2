use async_trait::async_trait;
use ck_core::ports::{ChangeOrigin, ChangeToken, ClipboardChangeOriginPort};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct OriginState {
    writes_in_flight: usize,
    last_local: Option<ChangeToken>,
}

/// In-process record of clipboard writes made by the paste pipeline.
#[derive(Debug, Default)]
pub struct InMemoryClipboardChangeOrigin {
    state: Mutex<OriginState>,
}

impl InMemoryClipboardChangeOrigin {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClipboardChangeOriginPort for InMemoryClipboardChangeOrigin {
    async fn begin_local_write(&self) {
        self.state.lock().await.writes_in_flight += 1;
    }

    async fn finish_local_write(&self, token: Option<ChangeToken>) {
        let mut state = self.state.lock().await;
        state.writes_in_flight = state.writes_in_flight.saturating_sub(1);
        if let Some(token) = token {
            state.last_local = Some(token);
        }
    }

    async fn classify(&self, observed: ChangeToken) -> ChangeOrigin {
        let mut state = self.state.lock().await;
        if state.writes_in_flight > 0 {
            return ChangeOrigin::WriteInFlight;
        }

        match state.last_local {
            Some(local) if local == observed => {
                state.last_local = None;
                ChangeOrigin::LocalWrite
            }
            // Tokens only grow: anything past our last write came from elsewhere.
            Some(local) if local < observed => {
                state.last_local = None;
                ChangeOrigin::External
            }
            _ => ChangeOrigin::External,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_write_is_reported_once() {
        let origin = InMemoryClipboardChangeOrigin::new();
        origin.begin_local_write().await;
        origin.finish_local_write(Some(ChangeToken(7))).await;

        assert_eq!(origin.classify(ChangeToken(7)).await, ChangeOrigin::LocalWrite);
        assert_eq!(origin.classify(ChangeToken(7)).await, ChangeOrigin::External);
    }

    #[tokio::test]
    async fn pending_write_defers_classification() {
        let origin = InMemoryClipboardChangeOrigin::new();
        origin.begin_local_write().await;

        assert_eq!(
            origin.classify(ChangeToken(3)).await,
            ChangeOrigin::WriteInFlight
        );

        origin.finish_local_write(Some(ChangeToken(3))).await;
        assert_eq!(origin.classify(ChangeToken(3)).await, ChangeOrigin::LocalWrite);
    }

    #[tokio::test]
    async fn later_foreign_change_is_external() {
        let origin = InMemoryClipboardChangeOrigin::new();
        origin.begin_local_write().await;
        origin.finish_local_write(Some(ChangeToken(4))).await;

        assert_eq!(origin.classify(ChangeToken(5)).await, ChangeOrigin::External);
        // The stale local token is dropped.
        assert_eq!(origin.classify(ChangeToken(4)).await, ChangeOrigin::External);
    }

    #[tokio::test]
    async fn failed_write_clears_in_flight_state() {
        let origin = InMemoryClipboardChangeOrigin::new();
        origin.begin_local_write().await;
        origin.finish_local_write(None).await;

        assert_eq!(origin.classify(ChangeToken(1)).await, ChangeOrigin::External);
    }
}
