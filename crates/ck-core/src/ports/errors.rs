use thiserror::Error;

/// Failure of an OS capability call.
///
/// Callers in the paste pipeline treat every variant as "try the next
/// strategy"; the variants exist for logging and for the few places that
/// branch on them.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    #[error("{0} does not apply to this content")]
    NotApplicable(&'static str),

    #[error("accessibility permission has not been granted")]
    PermissionDenied,

    #[error("no focused UI element")]
    NoFocusedElement,

    #[error("attribute unavailable: {0}")]
    AttributeUnavailable(String),

    #[error("script failed: {0}")]
    ScriptFailed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
