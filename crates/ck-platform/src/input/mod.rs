//! Synthetic keyboard input.

mod enigo_keys;
#[cfg(target_os = "macos")]
mod macos;

pub use enigo_keys::EnigoKeyEvents;
#[cfg(target_os = "macos")]
pub use macos::CgEventKeyEvents;

// Platform key event adapter
#[cfg(target_os = "macos")]
pub use macos::CgEventKeyEvents as LocalKeyEvents;
#[cfg(not(target_os = "macos"))]
pub use enigo_keys::EnigoKeyEvents as LocalKeyEvents;
