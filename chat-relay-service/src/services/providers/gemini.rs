//! Gemini AI provider implementation.
//!
//! Implements single-turn text generation using Google's Gemini REST API.

use super::{ProviderError, TextProvider};
use crate::config::GeminiSettings;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Gemini text provider.
///
/// Holds configuration only. Each call builds its own HTTP client, which is
/// released when the call returns, so no connection state outlives a request.
pub struct GeminiTextProvider {
    config: GeminiSettings,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiSettings) -> Self {
        Self { config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the API URL for the given model and method (without the key).
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base, self.config.model, method
        )
    }

    fn connect(&self) -> Result<Client, ProviderError> {
        Client::builder()
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let client = self.connect()?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart::Text {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.chars().count(),
            "Sending request to Gemini API"
        );

        let response = client
            .post(self.api_url("generateContent"))
            .query(&[("key", self.config.api_key.expose_secret().as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.without_url().to_string()))?;

        let text = extract_text(api_response)?;

        tracing::debug!(
            response_len = text.chars().count(),
            "Gemini API response received"
        );

        Ok(text)
    }
}

/// Pick the reply text: the first part of the first candidate.
///
/// Additional candidates and parts are ignored. A first part that is not text
/// counts as an empty response.
fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ProviderError::EmptyResponse)?;

    let first_part = candidate
        .content
        .and_then(|content| content.parts.into_iter().next());

    match first_part {
        Some(ContentPart::Text { text }) => Ok(text),
        Some(ContentPart::Other(_)) => Err(ProviderError::EmptyResponse),
        None if candidate.finish_reason.as_deref() == Some("SAFETY") => {
            Err(ProviderError::ContentFiltered)
        }
        None => Err(ProviderError::EmptyResponse),
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text { text: String },
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}
