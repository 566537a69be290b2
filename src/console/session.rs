use std::sync::Arc;

use anyhow::{Context, Result};
use ck_app::usecases::PasteHistoryEntryError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Notify;
use tracing::{info, warn};

use super::command::{ConsoleCommand, HELP};
use super::render::{render_list, render_report};
use crate::bootstrap::AppRuntime;

/// Drive the console until `quit` or end of input.
///
/// The clipboard poller runs for the whole session. `refresh` is the signal
/// raised by the console history view; each raise re-renders the list.
pub async fn run_console<R, W>(
    runtime: &AppRuntime,
    input: R,
    mut output: W,
    refresh: Arc<Notify>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // Whatever is on the clipboard at launch is not part of the history.
    if let Err(err) = runtime.usecases().capture_clipboard_change().prime().await {
        warn!(error = %err, "Failed to read the initial clipboard state");
    }

    let poller = runtime.clipboard_runtime();
    poller.start().await?;
    info!("Console session started");

    let result = session_loop(runtime, input, &mut output, &refresh).await;

    poller.stop().await?;
    info!("Console session ended");
    result
}

async fn session_loop<R, W>(
    runtime: &AppRuntime,
    input: R,
    output: &mut W,
    refresh: &Notify,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    write_line(output, "clipkeep ready, type `help` for commands").await?;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read console input")?,
            _ = refresh.notified() => {
                list(runtime, output).await?;
                continue;
            }
        };
        let Some(line) = line else {
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(err) => {
                write_line(output, &err.to_string()).await?;
                continue;
            }
        };

        match command {
            ConsoleCommand::List => list(runtime, output).await?,
            ConsoleCommand::Paste(position) => paste(runtime, output, position, false).await?,
            ConsoleCommand::Sticky(position) => paste(runtime, output, position, true).await?,
            ConsoleCommand::Clear => {
                runtime.usecases().clear_history().execute();
                write_line(output, "history cleared").await?;
            }
            ConsoleCommand::Help => write_line(output, HELP).await?,
            ConsoleCommand::Quit => return Ok(()),
        }
    }
}

async fn list<W: AsyncWrite + Unpin>(runtime: &AppRuntime, output: &mut W) -> Result<()> {
    let previews = runtime.usecases().list_entry_previews().execute();
    write_line(output, &render_list(&previews)).await
}

async fn paste<W: AsyncWrite + Unpin>(
    runtime: &AppRuntime,
    output: &mut W,
    position: usize,
    direct_mode: bool,
) -> Result<()> {
    let target = runtime.paste_target().await;
    let message = match runtime
        .usecases()
        .paste_history_entry()
        .execute(position, target, direct_mode)
        .await
    {
        Ok(report) => render_report(position, &report),
        Err(err @ PasteHistoryEntryError::NotFound(_)) => err.to_string(),
        Err(PasteHistoryEntryError::Paste(err)) => format!("paste rejected: {err}"),
    };
    write_line(output, &message).await
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
