//! Paste delivery pipeline.
//!
//! 粘贴流水线：写入剪贴板、激活目标应用、按顺序尝试各注入策略，
//! 并按目标应用配置执行"粘贴为链接"。

mod busy;
mod direct_insert;
mod error;
mod executor;
mod link_conversion;
mod report;
mod request;
mod strategy;

pub use error::PasteError;
pub use executor::PasteExecutor;
pub use report::{DeliveryMode, PasteReport, StrategyKind};
pub use request::PasteRequest;
pub use strategy::{
    AccessibilityInsertStrategy, DeliveryStrategy, ScriptedPasteStrategy,
    SyntheticShortcutStrategy,
};
