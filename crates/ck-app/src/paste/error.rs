/// Errors surfaced to callers of [`PasteExecutor::paste`](super::PasteExecutor::paste).
///
/// Delivery failures are not errors: they are logged and reported through
/// [`PasteReport`](super::PasteReport).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PasteError {
    #[error("a paste is already in progress")]
    Busy,
}
