//! # ck-platform
//!
//! Platform-specific implementations for ClipKeep.
//!
//! This crate implements the `ck-core` ports against the operating system:
//! the system clipboard, synthetic key events, automation scripts, the
//! accessibility API and foreground application tracking. Each module exports
//! a `Local*` alias naming the adapter for the current platform.

mod blocking;

pub mod accessibility;
pub mod clipboard;
pub mod foreground;
pub mod input;
pub mod runtime;
pub mod script;
