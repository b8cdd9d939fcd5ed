use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Desktop browser user agent; some recipe sites reject non-browser clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=No+Image";

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Provider used when none is given explicitly
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Request timeout in seconds, applied to page fetches and model calls
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with page fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Substituted for missing or unusable site images and logos
    #[serde(default = "default_placeholder_image_url")]
    pub placeholder_image_url: String,
    /// Content scraper heuristics
    #[serde(default)]
    pub scraper: ScraperConfig,
}

/// Configuration for a specific model provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    pub enabled: bool,
    /// Model identifier (e.g., "gpt-4o-mini", "claude-3-5-haiku-latest")
    pub model: String,
    /// Temperature for generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

/// Tuning knobs for the fallback heuristics of the content scraper
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Smallest item count a bare list needs to pass as an ingredient list
    #[serde(default = "default_min_list_items")]
    pub min_list_items: usize,
    /// Largest item count a bare list may have to pass as an ingredient list
    #[serde(default = "default_max_list_items")]
    pub max_list_items: usize,
    /// How many `<ul>`/`<ol>` elements are inspected, in document order
    #[serde(default = "default_candidate_lists")]
    pub candidate_lists: usize,
    /// Characters sampled from the main content region as a last resort
    #[serde(default = "default_content_sample_chars")]
    pub content_sample_chars: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            min_list_items: default_min_list_items(),
            max_list_items: default_max_list_items(),
            candidate_lists: default_candidate_lists(),
            content_sample_chars: default_content_sample_chars(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: HashMap::new(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            placeholder_image_url: default_placeholder_image_url(),
            scraper: ScraperConfig::default(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "openai".to_string()
}

fn default_temperature() -> f32 {
    0.0
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    BROWSER_USER_AGENT.to_string()
}

fn default_placeholder_image_url() -> String {
    PLACEHOLDER_IMAGE_URL.to_string()
}

fn default_min_list_items() -> usize {
    3
}

fn default_max_list_items() -> usize {
    30
}

fn default_candidate_lists() -> usize {
    5
}

fn default_content_sample_chars() -> usize {
    5000
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_INGEST__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_INGEST__PROVIDERS__OPENAI__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_INGEST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
