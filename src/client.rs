// src/client.rs
use reqwest::Url;

use crate::{
    config::ClientConfig,
    error::{ConfigError, ExchangeError, TransportError},
    message::{ExchangeRequest, ExchangeResponse},
    session::SessionId,
};

/// Talks to the answer endpoint. Holds no session state of its own; the
/// session is handed in on every call.
#[derive(Clone, Debug)]
pub struct ExchangeClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ExchangeClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let endpoint = config.endpoint()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One POST, one reply. Blank text never reaches the network.
    pub async fn submit_message(
        &self,
        text: &str,
        session: &SessionId,
    ) -> Result<String, ExchangeError> {
        if text.trim().is_empty() {
            return Err(ExchangeError::EmptyMessage);
        }

        let request = ExchangeRequest {
            msg: text,
            session_id: session.as_str(),
        };
        tracing::debug!(session_id = %session, endpoint = %self.endpoint, "sending message");

        let response = self
            .http
            .post(self.endpoint.clone())
            .form(&request)
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(TransportError::from)?;
        if !status.is_success() {
            return Err(TransportError::Status { status, body }.into());
        }

        let reply: ExchangeResponse =
            serde_json::from_str(&body).map_err(TransportError::MalformedPayload)?;
        Ok(reply.answer)
    }
}
