//! A minimal clipboard polling runtime.
//!
//! This runtime is responsible for lifecycle management (start/stop) and
//! drives a [`ClipboardCheck`] from a background task at a fixed interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

/// One clipboard inspection, run on every tick.
#[async_trait]
pub trait ClipboardCheck: Send + Sync {
    async fn check_once(&self) -> Result<()>;
}

pub struct PollingClipboardRuntime {
    check: Arc<dyn ClipboardCheck>,
    period: Duration,
    running: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl PollingClipboardRuntime {
    pub fn new(check: Arc<dyn ClipboardCheck>, period: Duration) -> Self {
        Self {
            check,
            period: period.max(Duration::from_millis(1)),
            running: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Start polling. Calling it again while running is a no-op.
    pub async fn start(&self) -> Result<()> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(());
        }

        let check = self.check.clone();
        let period = self.period;

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            // A slow check must not trigger a burst of catch-up ticks.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                if let Err(err) = check.check_once().await {
                    warn!(error = %err, "Clipboard check failed");
                }
            }
        });

        *self.handle.lock().await = Some(handle);
        info!(period_ms = period.as_millis() as u64, "Clipboard polling started");

        Ok(())
    }

    pub async fn stop(&self) -> Result<()> {
        if !self.running.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        if let Some(handle) = self.handle.lock().await.take() {
            handle.abort();
        }
        info!("Clipboard polling stopped");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct CountingCheck {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ClipboardCheck for CountingCheck {
        async fn check_once(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("pasteboard unavailable");
            }
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn polls_at_interval_until_stopped() {
        let check = Arc::new(CountingCheck::default());
        let runtime = PollingClipboardRuntime::new(check.clone(), Duration::from_millis(500));

        runtime.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(1_250)).await;
        // Ticks at 0, 500 and 1000 ms.
        assert_eq!(check.calls.load(Ordering::SeqCst), 3);

        runtime.stop().await.unwrap();
        assert!(!runtime.is_running());
        tokio::time::sleep(Duration::from_millis(2_000)).await;
        assert_eq!(check.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_idempotent() {
        let check = Arc::new(CountingCheck::default());
        let runtime = PollingClipboardRuntime::new(check.clone(), Duration::from_millis(100));

        runtime.start().await.unwrap();
        runtime.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(check.calls.load(Ordering::SeqCst), 1);
        runtime.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn failures_do_not_stop_polling() {
        let check = Arc::new(CountingCheck {
            fail: true,
            ..Default::default()
        });
        let runtime = PollingClipboardRuntime::new(check.clone(), Duration::from_millis(10));

        runtime.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(35)).await;

        assert_eq!(check.calls.load(Ordering::SeqCst), 4);
        runtime.stop().await.unwrap();
    }
}
