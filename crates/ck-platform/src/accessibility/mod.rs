//! Focused-element access and input permission.

#[cfg(target_os = "macos")]
mod macos;
mod unsupported;

#[cfg(target_os = "macos")]
pub use macos::{AxFocusedControl, AxPermission};
pub use unsupported::{NoPermissionRequired, UnsupportedFocusedControl};

#[cfg(target_os = "macos")]
pub use macos::{AxFocusedControl as LocalFocusedControl, AxPermission as LocalPermission};
#[cfg(not(target_os = "macos"))]
pub use unsupported::{
    NoPermissionRequired as LocalPermission, UnsupportedFocusedControl as LocalFocusedControl,
};
