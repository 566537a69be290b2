use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "clipkeep")]
#[command(about = "Clipboard history keeper with per-application paste delivery", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/clipkeep/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write logs to <data dir>/clipkeep/logs
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Watch the clipboard and accept console commands (default mode)
    Run,
    /// Show how a piece of copied text would be classified and previewed
    Classify {
        /// Text to classify
        text: String,
    },
    /// Show the paste behavior configured for an application
    Resolve {
        /// Application identifier (bundle id)
        #[arg(short, long)]
        app: String,
        /// Page URL to assume for browsers
        #[arg(short, long)]
        url: Option<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
