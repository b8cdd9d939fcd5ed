use thiserror::Error;

/// Errors that can occur while ingesting a recipe
#[derive(Error, Debug)]
pub enum ImportError {
    /// Input is not an absolute http(s) URL; nothing was sent over the network
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Page fetch failed (transport error, timeout or non-success status)
    #[error("Failed to fetch URL: {0}")]
    FetchFailed(String),

    /// Every scraping heuristic came up empty
    #[error("No recipe data found on this page")]
    NoRecipeDataFound,

    /// The model call produced no usable content
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// The model answered, but not with the expected object shape
    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),

    /// Provider could not be created (unknown, disabled, missing API key)
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
