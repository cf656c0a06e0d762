//! HTTP client for the chat relay.
//!
//! Every request resolves to either the reply text or one [`ChatFailure`].

use crate::config::ClientConfig;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Why a chat request produced no reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatFailure {
    /// No reply within the client timeout.
    Timeout,
    /// The relay rejected the message (400), with its explanation when given.
    InvalidInput(Option<String>),
    /// The relay answered with a failure status or an unreadable body.
    ServerError,
    /// No response at all: connection refused, DNS failure and the like.
    Unreachable,
}

impl fmt::Display for ChatFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatFailure::Timeout => write!(
                f,
                "Request timed out. The AI is taking too long to respond, please try again."
            ),
            ChatFailure::InvalidInput(Some(reason)) => write!(f, "Invalid request: {}", reason),
            ChatFailure::InvalidInput(None) => write!(
                f,
                "Invalid request. Please check your message and try again."
            ),
            ChatFailure::ServerError => write!(
                f,
                "Server error. The AI service is having trouble right now, please try again later."
            ),
            ChatFailure::Unreachable => write!(
                f,
                "Unable to connect to the chat server. Please make sure it is running."
            ),
        }
    }
}

impl std::error::Error for ChatFailure {}

impl ChatFailure {
    fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatFailure::Timeout
        } else {
            ChatFailure::Unreachable
        }
    }
}

/// Client for `POST /api/chat` and `GET /health`.
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    client: Client,
}

impl RelayClient {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one message and classify the outcome.
    pub async fn send(&self, message: &str) -> Result<String, ChatFailure> {
        let url = format!("{}/api/chat", self.base_url);

        tracing::debug!(message_len = message.chars().count(), "Sending chat message");

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Chat request failed");
                ChatFailure::from_transport(&e)
            })?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let reason = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|body| body.error);
            return Err(ChatFailure::InvalidInput(reason));
        }

        if !status.is_success() {
            tracing::warn!(status = %status, "Relay returned an error status");
            return Err(ChatFailure::ServerError);
        }

        response
            .json::<ChatResponse>()
            .await
            .map(|body| body.response)
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to read chat response");
                if e.is_timeout() {
                    ChatFailure::Timeout
                } else {
                    ChatFailure::ServerError
                }
            })
    }

    /// `true` when the relay answers its health probe.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Health probe failed");
                false
            }
        }
    }
}
