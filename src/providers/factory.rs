use crate::config::{ImportConfig, ProviderConfig};
use crate::error::ImportError;
use crate::providers::{AnthropicProvider, LlmProvider, OllamaProvider, OpenAIProvider};
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: Duration,
    ) -> Result<Box<dyn LlmProvider>, ImportError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(ImportError::ProviderError(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "openai" => Ok(Box::new(OpenAIProvider::new(config, timeout)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config, timeout)?)),
            "ollama" => Ok(Box::new(OllamaProvider::new(config, timeout)?)),
            _ => Err(ImportError::ProviderError(format!(
                "Unknown provider: {} (available: {})",
                provider_name,
                Self::available_providers().join(", ")
            ))),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(config: &ImportConfig) -> Result<Box<dyn LlmProvider>, ImportError> {
        Self::default_provider(config, config.timeout())
    }

    /// Get the default provider with a timeout other than the configured one
    pub fn default_provider(
        config: &ImportConfig,
        timeout: Duration,
    ) -> Result<Box<dyn LlmProvider>, ImportError> {
        let provider_name = &config.default_provider;
        let provider_config = config.providers.get(provider_name).ok_or_else(|| {
            ImportError::ProviderError(format!(
                "Default provider '{}' not found in configuration",
                provider_name
            ))
        })?;

        Self::create(provider_name, provider_config, timeout)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic", "ollama"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_provider_config() -> ProviderConfig {
        ProviderConfig {
            enabled: true,
            model: "test-model".to_string(),
            temperature: 0.0,
            max_tokens: 2000,
            api_key: Some("test-key".to_string()),
            base_url: None,
        }
    }

    fn timeout() -> Duration {
        Duration::from_secs(5)
    }

    #[test]
    fn test_create_openai_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("openai", &config, timeout()).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_create_anthropic_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("anthropic", &config, timeout()).unwrap();
        assert_eq!(provider.provider_name(), "anthropic");
    }

    #[test]
    fn test_create_ollama_provider() {
        let mut config = create_test_provider_config();
        config.api_key = None;
        let provider = ProviderFactory::create("ollama", &config, timeout()).unwrap();
        assert_eq!(provider.provider_name(), "ollama");
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = create_test_provider_config();
        let result = ProviderFactory::create("unknown", &config, timeout());
        match result {
            Err(ImportError::ProviderError(message)) => {
                assert!(message.contains("Unknown provider"));
                assert!(message.contains("available: openai, anthropic, ollama"));
            }
            _ => panic!("expected ProviderError"),
        }
    }

    #[test]
    fn test_create_disabled_provider() {
        let mut config = create_test_provider_config();
        config.enabled = false;

        let result = ProviderFactory::create("openai", &config, timeout());
        match result {
            Err(ImportError::ProviderError(message)) => {
                assert!(message.contains("not enabled in configuration"))
            }
            _ => panic!("expected ProviderError"),
        }
    }

    #[test]
    fn test_get_default_provider() {
        let mut providers = HashMap::new();
        providers.insert("anthropic".to_string(), create_test_provider_config());

        let config = ImportConfig {
            default_provider: "anthropic".to_string(),
            providers,
            ..ImportConfig::default()
        };

        let provider = ProviderFactory::get_default_provider(&config).unwrap();
        assert_eq!(provider.provider_name(), "anthropic");
    }

    #[test]
    fn test_get_default_provider_not_found() {
        let config = ImportConfig::default();

        let result = ProviderFactory::get_default_provider(&config);
        match result {
            Err(ImportError::ProviderError(message)) => assert!(message.contains("not found")),
            _ => panic!("expected ProviderError"),
        }
    }

    #[test]
    fn test_available_providers() {
        let providers = ProviderFactory::available_providers();
        assert_eq!(providers, vec!["openai", "anthropic", "ollama"]);
    }
}
