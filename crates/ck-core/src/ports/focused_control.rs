use async_trait::async_trait;

use super::errors::CapabilityError;
use crate::paste::TextRange;

/// Value and selection of the focused text control, read together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedText {
    pub value: String,
    pub selection: TextRange,
}

/// Accessibility access to the currently focused UI element.
///
/// `read_text` returns [`CapabilityError::NoFocusedElement`] when nothing has
/// focus, and another error when an element is focused but its value or
/// selection cannot be read.
#[async_trait]
pub trait FocusedControlPort: Send + Sync {
    async fn read_text(&self) -> Result<FocusedText, CapabilityError>;

    async fn set_value(&self, value: &str) -> Result<(), CapabilityError>;

    async fn set_selection(&self, range: TextRange) -> Result<(), CapabilityError>;

    /// Write `text` through the element's selected-text attribute. Editors
    /// usually replace the selection with it.
    async fn replace_selection(&self, text: &str) -> Result<(), CapabilityError>;
}
