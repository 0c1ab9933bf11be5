// src/widget.rs
use std::sync::Arc;

use crate::{
    client::ExchangeClient,
    error::{ExchangeError, TransportError},
    message::MessageRole,
    session::SessionId,
    surface::{DisplaySurface, InputSurface, Trigger},
};

/// What became of one input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Not a submit event, or the input was blank.
    Skipped,
    Replied,
    Failed,
}

/// Glue between the input surface, the exchange client and the display
/// surface. Clones share everything, so each submission can run on its own
/// task while earlier ones are still waiting for a reply.
#[derive(Clone)]
pub struct ChatWidget {
    client: ExchangeClient,
    session: SessionId,
    display: Arc<dyn DisplaySurface>,
    input: Arc<dyn InputSurface>,
}

impl ChatWidget {
    pub fn new(
        client: ExchangeClient,
        session: SessionId,
        display: Arc<dyn DisplaySurface>,
        input: Arc<dyn InputSurface>,
    ) -> Self {
        Self {
            client,
            session,
            display,
            input,
        }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Full submission: accept the input, then wait for the exchange.
    pub async fn handle(&self, trigger: Trigger) -> Outcome {
        match self.accept(trigger).await {
            Some(text) => self.exchange(&text).await,
            None => Outcome::Skipped,
        }
    }

    /// First half of a submission, shared by the send control and the Enter
    /// key: take the input text, echo it as a user message and clear the
    /// field. Returns the text to send, or `None` if there is nothing to send.
    pub async fn accept(&self, trigger: Trigger) -> Option<String> {
        if !trigger.is_submit() {
            return None;
        }
        let text = self.input.input_value().await;
        if text.trim().is_empty() {
            return None;
        }

        self.display.append_message(MessageRole::User, &text).await;
        self.input.clear_input().await;
        Some(text)
    }

    /// Second half: one request, then either the reply is displayed or the
    /// failure is logged. Blank text sends nothing and is skipped.
    pub async fn exchange(&self, text: &str) -> Outcome {
        match self.client.submit_message(text, &self.session).await {
            Ok(reply) => {
                self.on_reply_received(&reply).await;
                Outcome::Replied
            }
            Err(ExchangeError::EmptyMessage) => Outcome::Skipped,
            Err(ExchangeError::Transport(err)) => {
                self.on_submit_failure(&err);
                Outcome::Failed
            }
        }
    }

    pub async fn on_reply_received(&self, reply: &str) {
        self.display
            .append_message(MessageRole::Assistant, reply)
            .await;
        self.display.scroll_to_bottom().await;
    }

    pub fn on_submit_failure(&self, err: &TransportError) {
        tracing::error!(session_id = %self.session, error = %err, "failed to get answer");
    }
}
