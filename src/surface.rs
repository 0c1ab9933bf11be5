// src/surface.rs
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::message::{ChatMessage, MessageRole};

/// Key code of Enter.
pub const CONFIRM_KEY: u32 = 13;

/// Where the conversation is rendered.
#[async_trait]
pub trait DisplaySurface: Send + Sync {
    async fn append_message(&self, role: MessageRole, text: &str);
    async fn scroll_to_bottom(&self);
}

/// Where the user types.
#[async_trait]
pub trait InputSurface: Send + Sync {
    async fn input_value(&self) -> String;
    async fn clear_input(&self);
}

/// Input events that may start a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    SendClicked,
    KeyPress(u32),
}

impl Trigger {
    pub fn is_submit(self) -> bool {
        match self {
            Trigger::SendClicked => true,
            Trigger::KeyPress(code) => code == CONFIRM_KEY,
        }
    }
}

#[derive(Debug, Default)]
struct TranscriptData {
    messages: Vec<ChatMessage>,
    // Length of `messages` at the last scroll.
    scrolled_to: usize,
}

/// In-memory display surface: an append-only message log.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    inner: Arc<RwLock<TranscriptData>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.inner.read().await.messages.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.messages.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// True when the newest message has been scrolled into view.
    pub async fn is_scrolled_to_bottom(&self) -> bool {
        let data = self.inner.read().await;
        data.scrolled_to == data.messages.len()
    }
}

#[async_trait]
impl DisplaySurface for Transcript {
    async fn append_message(&self, role: MessageRole, text: &str) {
        let mut data = self.inner.write().await;
        data.messages.push(ChatMessage::new(role, text));
    }

    async fn scroll_to_bottom(&self) {
        let mut data = self.inner.write().await;
        data.scrolled_to = data.messages.len();
    }
}

/// In-memory input field.
#[derive(Clone, Debug, Default)]
pub struct InputBuffer {
    inner: Arc<RwLock<String>>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_value(&self, value: impl Into<String>) {
        *self.inner.write().await = value.into();
    }
}

#[async_trait]
impl InputSurface for InputBuffer {
    async fn input_value(&self) -> String {
        self.inner.read().await.clone()
    }

    async fn clear_input(&self) {
        self.inner.write().await.clear();
    }
}
