use ck_core::ports::CapabilityError;
use tokio::task::spawn_blocking;

/// Run a synchronous OS call off the async runtime.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, CapabilityError>
where
    F: FnOnce() -> Result<T, CapabilityError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f).await.map_err(|err| {
        CapabilityError::Other(anyhow::Error::new(err).context("blocking OS call did not complete"))
    })?
}
