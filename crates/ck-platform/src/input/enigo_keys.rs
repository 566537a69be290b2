use async_trait::async_trait;
use ck_core::paste::EditingShortcut;
use ck_core::ports::{CapabilityError, KeyEventPort};
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use tracing::trace;

use crate::blocking::run_blocking;

#[cfg(target_os = "macos")]
const COMMAND: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const COMMAND: Key = Key::Control;

/// Modifier keys held while one key is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Chord {
    pub modifiers: &'static [Key],
    pub key: Key,
}

pub(crate) fn chord_for(shortcut: EditingShortcut) -> Chord {
    let (modifiers, key): (&'static [Key], Key) = match shortcut {
        EditingShortcut::Paste => (&[COMMAND], Key::Unicode('v')),
        EditingShortcut::SelectPreviousCharacter => (&[Key::Shift], Key::LeftArrow),
        EditingShortcut::ConvertSelectionToLink => (&[COMMAND], Key::Unicode('k')),
        EditingShortcut::MoveRight => (&[], Key::RightArrow),
        EditingShortcut::JumpToDocumentEnd => (&[COMMAND], Key::End),
        #[cfg(target_os = "macos")]
        EditingShortcut::JumpLineEnd => (&[COMMAND], Key::RightArrow),
        #[cfg(not(target_os = "macos"))]
        EditingShortcut::JumpLineEnd => (&[], Key::End),
    };
    Chord { modifiers, key }
}

/// Key events through enigo. Used wherever no native adapter exists.
#[derive(Debug, Default)]
pub struct EnigoKeyEvents;

impl EnigoKeyEvents {
    pub fn new() -> Self {
        Self
    }
}

fn input_error(err: impl std::error::Error + Send + Sync + 'static) -> CapabilityError {
    CapabilityError::Other(anyhow::Error::new(err).context("enigo input failed"))
}

fn press_chord(chord: Chord) -> Result<(), CapabilityError> {
    let mut enigo = Enigo::new(&Settings::default()).map_err(input_error)?;
    for modifier in chord.modifiers {
        enigo.key(*modifier, Direction::Press).map_err(input_error)?;
    }
    let clicked = enigo.key(chord.key, Direction::Click).map_err(input_error);
    // Release modifiers even when the click failed.
    for modifier in chord.modifiers.iter().rev() {
        enigo.key(*modifier, Direction::Release).map_err(input_error)?;
    }
    clicked
}

#[async_trait]
impl KeyEventPort for EnigoKeyEvents {
    async fn send_shortcut(&self, shortcut: EditingShortcut) -> Result<(), CapabilityError> {
        trace!(?shortcut, "Sending shortcut via enigo");
        let chord = chord_for(shortcut);
        run_blocking(move || press_chord(chord)).await
    }

    async fn type_utf16(&self, units: &[u16]) -> Result<(), CapabilityError> {
        let text = String::from_utf16(units)
            .map_err(|err| CapabilityError::Other(anyhow::Error::new(err)))?;
        run_blocking(move || {
            let mut enigo = Enigo::new(&Settings::default()).map_err(input_error)?;
            enigo.text(&text).map_err(input_error)
        })
        .await
    }
}
