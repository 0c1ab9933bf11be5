// src/config.rs
use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ANSWER_PATH: &str = "/get_answer";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub answer_path: String,
    /// `None` waits for the backend forever.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            answer_path: DEFAULT_ANSWER_PATH.to_string(),
            request_timeout: None,
        }
    }

    pub fn with_answer_path(mut self, path: impl Into<String>) -> Self {
        self.answer_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Full URL of the answer endpoint. Any path prefix in `base_url` is kept.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let base = self.base_url.trim_end_matches('/');
        let path = self.answer_path.trim_start_matches('/');
        let raw = format!("{}/{}", base, path);
        Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }
}
