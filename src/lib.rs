//! ClipKeep
//!
//! 剪贴板历史管理器

pub mod bootstrap;
pub mod cli;
pub mod console;

pub use bootstrap::AppRuntime;
pub use cli::{Cli, Commands};
