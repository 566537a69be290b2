use anyhow::Result;
use clap::Parser;
use clipkeep_lib::bootstrap::{self, default_log_dir, init_tracing_subscriber, resolve_settings};
use clipkeep_lib::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_file.then(default_log_dir).flatten();
    init_tracing_subscriber(log_dir)?;

    let settings = resolve_settings(cli.config.clone())?;

    match cli.command() {
        Commands::Run => bootstrap::run_app(settings).await,
        Commands::Classify { text } => {
            println!("{}", bootstrap::classify(&text, &settings));
            Ok(())
        }
        Commands::Resolve { app, url } => {
            let behavior = bootstrap::resolve(&settings, &app, url).await;
            println!("{}", behavior.label());
            Ok(())
        }
    }
}
