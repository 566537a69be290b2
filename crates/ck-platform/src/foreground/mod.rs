//! Foreground application tracking.

#[cfg(target_os = "macos")]
mod macos;
mod unsupported;

#[cfg(target_os = "macos")]
pub use macos::WorkspaceForegroundApp;
pub use unsupported::UnsupportedForegroundApp;

#[cfg(target_os = "macos")]
pub use macos::WorkspaceForegroundApp as LocalForegroundApp;
#[cfg(not(target_os = "macos"))]
pub use unsupported::UnsupportedForegroundApp as LocalForegroundApp;
