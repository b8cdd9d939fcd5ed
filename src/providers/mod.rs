mod anthropic;
mod factory;
mod function;
mod ollama;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use function::FnProvider;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::RECIPE_EXTRACTION_PROMPT;

use crate::error::ImportError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

/// Unified trait for all text-completion model providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Send one system + user message pair and return the completion text.
    ///
    /// `Ok(None)` means the endpoint answered without any content. Transport
    /// failures, timeouts and non-success statuses are `ModelUnavailable`.
    async fn complete(&self, system: &str, user: &str) -> Result<Option<String>, ImportError>;
}

pub(crate) fn http_client(timeout: Duration) -> Result<Client, ImportError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ImportError::ModelUnavailable(format!("failed to create HTTP client: {e}")))
}

/// Send a JSON request to a model endpoint and return the decoded body.
pub(crate) async fn send_json(provider: &str, request: RequestBuilder) -> Result<Value, ImportError> {
    let response = request
        .send()
        .await
        .map_err(|e| ImportError::ModelUnavailable(format!("{provider}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ImportError::ModelUnavailable(format!(
            "{provider} returned status {status}: {body}"
        )));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| ImportError::ModelUnavailable(format!("{provider}: {e}")))?;
    debug!("{} response: {:?}", provider, body);
    Ok(body)
}

/// Non-empty string at `value`, if any.
pub(crate) fn content_at(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|content| !content.trim().is_empty())
        .map(String::from)
}
