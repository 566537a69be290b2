//! ClipKeep Application Orchestration Layer
//!
//! This crate contains the use cases that sit between the capability ports
//! and the frontends: clipboard ingestion, history projections and the paste
//! delivery pipeline.

pub mod deps;
pub mod models;
pub mod paste;
pub mod services;
pub mod usecases;

pub use deps::AppDeps;
pub use paste::{PasteError, PasteExecutor, PasteReport, PasteRequest};
pub use services::ClipboardHistory;
