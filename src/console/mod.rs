//! Line-oriented console frontend.

mod command;
mod render;
mod session;
mod view;

pub use command::{CommandParseError, ConsoleCommand, HELP};
pub use render::{render_list, render_report, render_row};
pub use session::run_console;
pub use view::ConsoleHistoryView;
