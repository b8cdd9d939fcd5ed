use std::time::Duration;

use log::info;

use crate::config::{ImportConfig, ProviderConfig};
use crate::extractors::{RecipeScraper, StructuredRecipeExtractor};
use crate::providers::{LlmProvider, ProviderFactory};
use crate::{ExtractedRecipeData, ImportError, RawScrapeResult};

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Scrape the recipe from a URL
    Url(String),
    /// Use already scraped or pasted text, skipping the scraper
    Text(String),
}

/// Represents the desired output
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Structured, validated recipe (default)
    #[default]
    Structured,
    /// Raw scraper text without a model call
    Raw,
}

/// Result of a recipe import operation
#[derive(Debug, Clone)]
pub enum ImportResult {
    /// Structured recipe ready for persistence
    Recipe(ExtractedRecipeData),
    /// Scraper output only
    Raw(RawScrapeResult),
}

/// Built-in model providers selectable by name
#[derive(Debug, Clone, Copy)]
pub enum ProviderKind {
    OpenAI,
    Anthropic,
    Ollama,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Ollama => "ollama",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "openai" => Some(ProviderKind::OpenAI),
            "anthropic" => Some(ProviderKind::Anthropic),
            "ollama" => Some(ProviderKind::Ollama),
            _ => None,
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "gpt-4o-mini",
            ProviderKind::Anthropic => "claude-3-5-haiku-latest",
            ProviderKind::Ollama => "llama3.1",
        }
    }
}

/// Builder for configuring and executing recipe imports
#[derive(Default)]
pub struct RecipeImporterBuilder {
    source: Option<InputSource>,
    mode: OutputMode,
    provider: Option<Box<dyn LlmProvider>>,
    provider_kind: Option<ProviderKind>,
    config: Option<ImportConfig>,
    timeout: Option<Duration>,
    api_key: Option<String>,
    model: Option<String>,
}

impl RecipeImporterBuilder {
    /// Set the input source to a URL
    ///
    /// # Example
    /// ```
    /// use recipe_ingest::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Set the input source to plain text
    ///
    /// The text goes straight to the model; the scraper is skipped.
    ///
    /// # Example
    /// ```
    /// use recipe_ingest::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .text("Ingredients:\n2 eggs\n200 g flour");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Stop after scraping and return the raw text
    pub fn scrape_only(mut self) -> Self {
        self.mode = OutputMode::Raw;
        self
    }

    /// Use a ready-made provider, e.g. a [`FnProvider`](crate::providers::FnProvider)
    pub fn provider(mut self, provider: Box<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Pick one of the built-in providers instead of the configured default
    ///
    /// # Example
    /// ```
    /// use recipe_ingest::{ProviderKind, RecipeImporter};
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe")
    ///     .provider_kind(ProviderKind::Anthropic);
    /// ```
    pub fn provider_kind(mut self, kind: ProviderKind) -> Self {
        self.provider_kind = Some(kind);
        self
    }

    /// Use this configuration instead of loading `config.toml` and the environment
    pub fn config(mut self, config: ImportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a timeout for page fetches and model calls
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the API key for the model provider
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the model provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build and execute the import
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified
    /// - `scrape_only()` was combined with text input
    /// - Any pipeline stage fails
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_ingest::RecipeImporter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeImporter::builder()
    ///     .url("https://example.com/recipe")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ImportResult, ImportError> {
        let source = self.source.ok_or_else(|| {
            ImportError::BuilderError(
                "No input source specified. Use .url() or .text()".to_string(),
            )
        })?;

        let config = match self.config {
            Some(config) => config,
            None => ImportConfig::load()?,
        };
        let timeout = self.timeout.unwrap_or_else(|| config.timeout());

        let raw_text = match (source, self.mode) {
            (InputSource::Url(url), mode) => {
                let scraped = RecipeScraper::with_timeout(&config, timeout)?
                    .scrape(&url)
                    .await?;
                if let OutputMode::Raw = mode {
                    return Ok(ImportResult::Raw(scraped));
                }
                scraped.into_inner()
            }
            (InputSource::Text(_), OutputMode::Raw) => {
                return Err(ImportError::BuilderError(
                    "Cannot use scrape_only() with text input".to_string(),
                ))
            }
            (InputSource::Text(text), OutputMode::Structured) => {
                if text.trim().is_empty() {
                    return Err(ImportError::BuilderError(
                        "Recipe text cannot be empty".to_string(),
                    ));
                }
                text
            }
        };

        let provider = match self.provider {
            Some(provider) => provider,
            None => resolve_provider(
                &config,
                timeout,
                self.provider_kind,
                self.api_key,
                self.model,
            )?,
        };
        info!("Using provider '{}'", provider.provider_name());

        let recipe = StructuredRecipeExtractor::new(provider)
            .extract(&raw_text)
            .await?;
        Ok(ImportResult::Recipe(recipe))
    }
}

/// Pick the provider from explicit overrides or fall back to the configured default.
fn resolve_provider(
    config: &ImportConfig,
    timeout: Duration,
    kind: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
) -> Result<Box<dyn LlmProvider>, ImportError> {
    if kind.is_none() && api_key.is_none() && model.is_none() {
        return ProviderFactory::default_provider(config, timeout);
    }

    let kind = kind
        .or_else(|| ProviderKind::from_name(&config.default_provider))
        .unwrap_or(ProviderKind::OpenAI);
    let name = kind.as_str();

    let mut provider_config = config
        .providers
        .get(name)
        .cloned()
        .unwrap_or_else(|| ProviderConfig {
            enabled: true,
            model: kind.default_model().to_string(),
            temperature: 0.0,
            max_tokens: 2000,
            api_key: None,
            base_url: None,
        });
    if api_key.is_some() {
        provider_config.api_key = api_key;
    }
    if let Some(model) = model {
        provider_config.model = model;
    }

    ProviderFactory::create(name, &provider_config, timeout)
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    ///
    /// # Example
    /// ```
    /// use recipe_ingest::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder();
    /// ```
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
