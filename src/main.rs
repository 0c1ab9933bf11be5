use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chat_exchange::{
    ChatWidget, ClientConfig, ExchangeClient,
    config::{DEFAULT_ANSWER_PATH, DEFAULT_BACKEND_URL},
    session::resolve_session,
    surface::InputBuffer,
    terminal::{self, StdoutDisplay},
};
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chat-exchange", about = "Chat with a /get_answer backend from the terminal")]
struct Cli {
    /// Base URL of the chat backend
    #[arg(long, env = "CHAT_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Path of the answer endpoint
    #[arg(long, env = "CHAT_ANSWER_PATH", default_value = DEFAULT_ANSWER_PATH)]
    answer_path: String,

    /// Give up on a reply after this many seconds (waits forever when unset)
    #[arg(long, env = "CHAT_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Reuse an existing session instead of starting a new one
    #[arg(long)]
    session_id: Option<String>,

    /// User name; with --conversation, forms the session id "<user> - <conversation>"
    #[arg(long, requires = "conversation")]
    user: Option<String>,

    /// Conversation id, used together with --user
    #[arg(long, requires = "user")]
    conversation: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::new(cli.backend_url).with_answer_path(cli.answer_path);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = ExchangeClient::new(&config).context("failed to set up chat client")?;

    let session = resolve_session(
        cli.session_id.as_deref(),
        cli.user.as_deref(),
        cli.conversation.as_deref(),
    );
    tracing::info!(session_id = %session, endpoint = %client.endpoint(), "chat session started");

    let input = InputBuffer::new();
    let widget = ChatWidget::new(
        client,
        session,
        Arc::new(StdoutDisplay),
        Arc::new(input.clone()),
    );

    let summary = terminal::run(widget, input, BufReader::new(tokio::io::stdin()))
        .await
        .context("failed to read input")?;
    tracing::info!(replied = summary.replied, failed = summary.failed, "chat session ended");
    Ok(())
}
