//! OpenAI-compatible chat-completion provider.
//!
//! Calls `{base_url}/chat/completions` once per request. There is no retry;
//! the reqwest client enforces the configured timeout.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{ChatProvider, Completion, CompletionRequest, ProviderError};
use crate::config::ProviderConfig;

/// Provider backed by an OpenAI-compatible HTTP API (OpenRouter by default).
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: ProviderConfig,
}

impl OpenAiCompatibleProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn map_send_error(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(self.config.timeout)
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatibleProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        let url = self.config.completions_url();
        debug!(%url, model = %request.model, "sending chat completion");

        let mut req_builder = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(request);
        if let Some(site_url) = &self.config.site_url {
            req_builder = req_builder.header("HTTP-Referer", site_url);
        }
        if let Some(site_name) = &self.config.site_name {
            req_builder = req_builder.header("X-Title", site_name);
        }

        let resp = req_builder
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(ProviderError::Status { status, body });
        }

        let completion: Completion = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.config.timeout)
            } else {
                ProviderError::Decode(e.to_string())
            }
        })?;

        debug!(
            choices = completion.choices.as_ref().map_or(0, Vec::len),
            "chat completion received"
        );
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TIMEOUT;

    // Nothing listens on port 1; the connection is refused immediately.
    #[tokio::test]
    async fn unreachable_provider_is_transport_error() {
        let config = ProviderConfig::new("http://127.0.0.1:1", "k", DEFAULT_TIMEOUT).unwrap();
        let provider = OpenAiCompatibleProvider::new(config).unwrap();
        let req = CompletionRequest::new("m", "sys", "hi", 800);
        let err = provider.complete(&req).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)), "got {err:?}");
    }

    #[test]
    fn provider_keeps_config() {
        let config = ProviderConfig::new("http://localhost:8080/v1", "k", DEFAULT_TIMEOUT)
            .unwrap()
            .with_site(Some("https://coach.example".into()), None);
        let provider = OpenAiCompatibleProvider::new(config).unwrap();
        assert_eq!(provider.config().site_url.as_deref(), Some("https://coach.example"));
        assert_eq!(
            provider.config().completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }
}
