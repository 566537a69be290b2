//! Bootstrap: configuration, logging, dependency wiring and the runtime that
//! frontends drive.

pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, resolve_settings};
pub use run::{classify, resolve, run_app};
pub use runtime::{AppRuntime, UseCases};
pub use self::tracing::{default_log_dir, init_tracing_subscriber};
pub use wiring::{wire_dependencies, WiringError};
