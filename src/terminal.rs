// src/terminal.rs
use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

use crate::{
    message::MessageRole,
    surface::{CONFIRM_KEY, DisplaySurface, InputBuffer, Trigger},
    widget::{ChatWidget, Outcome},
};

const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "sair"];

/// Prints the conversation on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutDisplay;

#[async_trait]
impl DisplaySurface for StdoutDisplay {
    async fn append_message(&self, role: MessageRole, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{}: {}", role.label(), text) {
            tracing::warn!(error = %err, "failed to write message to stdout");
        }
    }

    async fn scroll_to_bottom(&self) {
        if let Err(err) = std::io::stdout().lock().flush() {
            tracing::warn!(error = %err, "failed to flush stdout");
        }
    }
}

pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_COMMANDS.iter().any(|cmd| line.eq_ignore_ascii_case(cmd))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub replied: usize,
    pub failed: usize,
}

/// Feed lines from `reader` into the widget as if each one were typed and
/// followed by Enter. Every exchange runs on its own task, so a slow reply
/// never blocks the next line. Returns once input ends and every exchange
/// has settled.
pub async fn run<R>(
    widget: ChatWidget,
    input: InputBuffer,
    reader: R,
) -> std::io::Result<RunSummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut pending = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        if is_exit_command(&line) {
            break;
        }
        input.set_value(line).await;
        if let Some(text) = widget.accept(Trigger::KeyPress(CONFIRM_KEY)).await {
            let widget = widget.clone();
            pending.spawn(async move { widget.exchange(&text).await });
        }
    }

    let mut summary = RunSummary::default();
    while let Some(joined) = pending.join_next().await {
        match joined {
            Ok(Outcome::Replied) => summary.replied += 1,
            Ok(Outcome::Failed) => summary.failed += 1,
            Ok(Outcome::Skipped) => {}
            Err(err) => {
                tracing::error!(error = %err, "exchange task panicked");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
