//! Focused-element access through the macOS Accessibility API.

use std::ffi::c_void;

use async_trait::async_trait;
use ck_core::paste::TextRange;
use ck_core::ports::{CapabilityError, FocusedControlPort, FocusedText, InjectionPermissionPort};
use core_foundation::base::{CFRange, CFType, CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::string::{CFString, CFStringRef};
use tracing::{debug, info, warn};

use crate::blocking::run_blocking;

type AXUIElementRef = CFTypeRef;
type AXError = i32;

const K_AX_ERROR_SUCCESS: AXError = 0;
const K_AX_ERROR_API_DISABLED: AXError = -25211;
const K_AX_ERROR_NO_VALUE: AXError = -25212;
const K_AX_VALUE_CF_RANGE_TYPE: u32 = 4;

const AX_FOCUSED_UI_ELEMENT: &str = "AXFocusedUIElement";
const AX_VALUE: &str = "AXValue";
const AX_SELECTED_TEXT_RANGE: &str = "AXSelectedTextRange";
const AX_SELECTED_TEXT: &str = "AXSelectedText";

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn AXIsProcessTrustedWithOptions(options: CFDictionaryRef) -> bool;
    fn AXUIElementCreateSystemWide() -> AXUIElementRef;
    fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: *mut CFTypeRef,
    ) -> AXError;
    fn AXUIElementSetAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: CFTypeRef,
    ) -> AXError;
    fn AXValueCreate(value_type: u32, value: *const c_void) -> CFTypeRef;
    fn AXValueGetValue(value: CFTypeRef, value_type: u32, out: *mut c_void) -> bool;
}

fn ax_error(attribute: &str, code: AXError) -> CapabilityError {
    match code {
        K_AX_ERROR_API_DISABLED => CapabilityError::PermissionDenied,
        K_AX_ERROR_NO_VALUE => CapabilityError::AttributeUnavailable(format!("{attribute} has no value")),
        _ => CapabilityError::AttributeUnavailable(format!("{attribute} (AXError {code})")),
    }
}

/// Owned `AXUIElementRef`.
struct AxElement(CFType);

impl AxElement {
    fn focused() -> Result<Self, CapabilityError> {
        let system = unsafe { AXUIElementCreateSystemWide() };
        if system.is_null() {
            return Err(CapabilityError::NoFocusedElement);
        }
        let system = AxElement(unsafe { CFType::wrap_under_create_rule(system) });

        match system.copy_attribute(AX_FOCUSED_UI_ELEMENT) {
            Ok(element) => Ok(AxElement(element)),
            Err(CapabilityError::PermissionDenied) => Err(CapabilityError::PermissionDenied),
            Err(_) => Err(CapabilityError::NoFocusedElement),
        }
    }

    fn copy_attribute(&self, attribute: &'static str) -> Result<CFType, CapabilityError> {
        let name = CFString::from_static_string(attribute);
        let mut value: CFTypeRef = std::ptr::null();
        let code = unsafe {
            AXUIElementCopyAttributeValue(
                self.0.as_CFTypeRef(),
                name.as_concrete_TypeRef(),
                &mut value,
            )
        };
        if code != K_AX_ERROR_SUCCESS || value.is_null() {
            return Err(ax_error(attribute, code));
        }
        Ok(unsafe { CFType::wrap_under_create_rule(value) })
    }

    fn set_attribute(&self, attribute: &'static str, value: &CFType) -> Result<(), CapabilityError> {
        let name = CFString::from_static_string(attribute);
        let code = unsafe {
            AXUIElementSetAttributeValue(
                self.0.as_CFTypeRef(),
                name.as_concrete_TypeRef(),
                value.as_CFTypeRef(),
            )
        };
        if code != K_AX_ERROR_SUCCESS {
            return Err(ax_error(attribute, code));
        }
        Ok(())
    }

    fn string_attribute(&self, attribute: &'static str) -> Result<String, CapabilityError> {
        self.copy_attribute(attribute)?
            .downcast::<CFString>()
            .map(|value| value.to_string())
            .ok_or_else(|| CapabilityError::AttributeUnavailable(format!("{attribute} is not text")))
    }

    fn range_attribute(&self, attribute: &'static str) -> Result<TextRange, CapabilityError> {
        let value = self.copy_attribute(attribute)?;
        let mut range = CFRange::init(0, 0);
        let ok = unsafe {
            AXValueGetValue(
                value.as_CFTypeRef(),
                K_AX_VALUE_CF_RANGE_TYPE,
                &mut range as *mut CFRange as *mut c_void,
            )
        };
        if !ok {
            return Err(CapabilityError::AttributeUnavailable(format!(
                "{attribute} is not a range"
            )));
        }
        Ok(TextRange {
            location: usize::try_from(range.location).unwrap_or(0),
            length: usize::try_from(range.length).unwrap_or(0),
        })
    }
}

fn range_value(range: TextRange) -> Result<CFType, CapabilityError> {
    let cf_range = CFRange::init(range.location as isize, range.length as isize);
    let value = unsafe {
        AXValueCreate(
            K_AX_VALUE_CF_RANGE_TYPE,
            &cf_range as *const CFRange as *const c_void,
        )
    };
    if value.is_null() {
        return Err(CapabilityError::Other(anyhow::anyhow!("AXValueCreate failed")));
    }
    Ok(unsafe { CFType::wrap_under_create_rule(value) })
}

/// [`FocusedControlPort`] over the system-wide focused UI element.
#[derive(Debug, Default)]
pub struct AxFocusedControl;

impl AxFocusedControl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FocusedControlPort for AxFocusedControl {
    async fn read_text(&self) -> Result<FocusedText, CapabilityError> {
        run_blocking(|| {
            let element = AxElement::focused()?;
            let value = element.string_attribute(AX_VALUE)?;
            let selection = element.range_attribute(AX_SELECTED_TEXT_RANGE)?;
            Ok(FocusedText { value, selection })
        })
        .await
    }

    async fn set_value(&self, value: &str) -> Result<(), CapabilityError> {
        let value = value.to_string();
        run_blocking(move || {
            AxElement::focused()?.set_attribute(AX_VALUE, &CFString::new(&value).as_CFType())
        })
        .await
    }

    async fn set_selection(&self, range: TextRange) -> Result<(), CapabilityError> {
        run_blocking(move || {
            AxElement::focused()?.set_attribute(AX_SELECTED_TEXT_RANGE, &range_value(range)?)
        })
        .await
    }

    async fn replace_selection(&self, text: &str) -> Result<(), CapabilityError> {
        let text = text.to_string();
        run_blocking(move || {
            AxElement::focused()?
                .set_attribute(AX_SELECTED_TEXT, &CFString::new(&text).as_CFType())
        })
        .await
    }
}

/// Accessibility trust, required before posting events to other apps.
#[derive(Debug, Default)]
pub struct AxPermission;

impl AxPermission {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InjectionPermissionPort for AxPermission {
    async fn is_granted(&self) -> bool {
        unsafe { AXIsProcessTrusted() }
    }

    async fn request(&self) {
        let key = CFString::from_static_string("AXTrustedCheckOptionPrompt");
        let value = CFBoolean::true_value();
        let options = CFDictionary::from_CFType_pairs(&[(key.as_CFType(), value.as_CFType())]);

        let trusted = unsafe { AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef()) };
        if trusted {
            debug!("Accessibility permission already granted");
        } else {
            info!("Accessibility permission prompt shown");
            warn!("Grant access in System Settings > Privacy & Security > Accessibility");
        }
    }
}
