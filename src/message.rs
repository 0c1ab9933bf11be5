// src/message.rs
use serde::{Deserialize, Serialize};

/// Form body of `POST /get_answer`.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRequest<'a> {
    pub msg: &'a str,
    pub session_id: &'a str,
}

/// Reply payload. Anything besides `answer` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeResponse {
    pub answer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn label(self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Assistant => "Assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
