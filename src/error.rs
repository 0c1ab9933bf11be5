// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Anything that went wrong on the wire. Callers treat every variant the
/// same way; the split only exists for logging.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("backend answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed reply payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Network(err)
        }
    }
}

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("message cannot be empty")]
    EmptyMessage,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
