use async_trait::async_trait;
use ck_core::paste::TextRange;
use ck_core::ports::{CapabilityError, FocusedControlPort, FocusedText, InjectionPermissionPort};

const CAPABILITY: &str = "focused element access";

/// Focused-control access on platforms without an accessibility adapter.
/// Every call fails, so the pipeline moves on to its next strategy.
#[derive(Debug, Default)]
pub struct UnsupportedFocusedControl;

#[async_trait]
impl FocusedControlPort for UnsupportedFocusedControl {
    async fn read_text(&self) -> Result<FocusedText, CapabilityError> {
        Err(CapabilityError::Unsupported(CAPABILITY))
    }

    async fn set_value(&self, _value: &str) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported(CAPABILITY))
    }

    async fn set_selection(&self, _range: TextRange) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported(CAPABILITY))
    }

    async fn replace_selection(&self, _text: &str) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported(CAPABILITY))
    }
}

/// Platforms where posting input needs no user grant.
#[derive(Debug, Default)]
pub struct NoPermissionRequired;

#[async_trait]
impl InjectionPermissionPort for NoPermissionRequired {
    async fn is_granted(&self) -> bool {
        true
    }

    async fn request(&self) {}
}
