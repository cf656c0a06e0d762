//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock text provider for testing.
///
/// Records every prompt it receives so tests can assert on what reached the
/// upstream seam.
pub struct MockTextProvider {
    enabled: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// `enabled = false` makes every call fail like an unreachable upstream.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        if !self.enabled {
            return Err(ProviderError::Network(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(format!("Mock response for: {}", prompt))
    }
}
