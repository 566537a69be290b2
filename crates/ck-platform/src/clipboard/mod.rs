//! System clipboard access and change detection.

mod generation;
mod image_codec;
mod local;
#[cfg(target_os = "macos")]
mod macos;

pub use generation::{image_fingerprint, text_fingerprint, FingerprintGeneration};
pub use image_codec::{decode_png, encode_png};
pub use local::LocalClipboard;
