use async_trait::async_trait;
use ck_core::paste::EditingShortcut;
use ck_core::ports::{CapabilityError, KeyEventPort};
use core_graphics::event::{CGEvent, CGEventFlags, CGEventTapLocation, CGKeyCode};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use tracing::trace;

use crate::blocking::run_blocking;

// Key codes for macOS (ANSI standard)
const K_VK_ANSI_V: CGKeyCode = 0x09;
const K_VK_ANSI_K: CGKeyCode = 0x28;
const K_VK_LEFT_ARROW: CGKeyCode = 0x7B;
const K_VK_RIGHT_ARROW: CGKeyCode = 0x7C;
const K_VK_END: CGKeyCode = 0x77;

fn keystroke_for(shortcut: EditingShortcut) -> (CGKeyCode, CGEventFlags) {
    match shortcut {
        EditingShortcut::Paste => (K_VK_ANSI_V, CGEventFlags::CGEventFlagCommand),
        EditingShortcut::SelectPreviousCharacter => {
            (K_VK_LEFT_ARROW, CGEventFlags::CGEventFlagShift)
        }
        EditingShortcut::ConvertSelectionToLink => (K_VK_ANSI_K, CGEventFlags::CGEventFlagCommand),
        EditingShortcut::MoveRight => (K_VK_RIGHT_ARROW, CGEventFlags::CGEventFlagNull),
        EditingShortcut::JumpToDocumentEnd => (K_VK_END, CGEventFlags::CGEventFlagCommand),
        EditingShortcut::JumpLineEnd => (K_VK_RIGHT_ARROW, CGEventFlags::CGEventFlagCommand),
    }
}

fn event_error(what: &str) -> CapabilityError {
    CapabilityError::Other(anyhow::anyhow!("Failed to create {what}"))
}

fn event_source() -> Result<CGEventSource, CapabilityError> {
    CGEventSource::new(CGEventSourceStateID::CombinedSessionState)
        .map_err(|_| event_error("CGEventSource"))
}

fn post_keystroke(key_code: CGKeyCode, flags: CGEventFlags) -> Result<(), CapabilityError> {
    let source = event_source()?;

    let key_down = CGEvent::new_keyboard_event(source.clone(), key_code, true)
        .map_err(|_| event_error("key down event"))?;
    key_down.set_flags(flags);
    key_down.post(CGEventTapLocation::AnnotatedSession);

    let key_up = CGEvent::new_keyboard_event(source, key_code, false)
        .map_err(|_| event_error("key up event"))?;
    key_up.set_flags(flags);
    key_up.post(CGEventTapLocation::AnnotatedSession);

    Ok(())
}

fn post_unicode(units: &[u16]) -> Result<(), CapabilityError> {
    let source = event_source()?;

    for key_down in [true, false] {
        let event = CGEvent::new_keyboard_event(source.clone(), 0, key_down)
            .map_err(|_| event_error("unicode key event"))?;
        event.set_string_from_utf16_unchecked(units);
        event.post(CGEventTapLocation::HID);
    }
    Ok(())
}

/// Key events posted through Core Graphics.
#[derive(Debug, Default)]
pub struct CgEventKeyEvents;

impl CgEventKeyEvents {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KeyEventPort for CgEventKeyEvents {
    async fn send_shortcut(&self, shortcut: EditingShortcut) -> Result<(), CapabilityError> {
        let (key_code, flags) = keystroke_for(shortcut);
        trace!(?shortcut, key_code, "Posting keystroke");
        run_blocking(move || post_keystroke(key_code, flags)).await
    }

    async fn type_utf16(&self, units: &[u16]) -> Result<(), CapabilityError> {
        let units = units.to_vec();
        run_blocking(move || post_unicode(&units)).await
    }
}
