//! Recipe ingestion pipeline.
//!
//! Turns a third-party recipe web page into a structured, validated recipe:
//!
//! 1. [`SiteMetadataExtractor`] reads name, description, image and logo of a
//!    recipe website.
//! 2. [`RecipeScraper`] locates a recipe name and ingredient text on a page.
//! 3. [`StructuredRecipeExtractor`] asks a language model for a typed
//!    ingredient list and filters it against the unit vocabulary.
//!
//! Each call is independent; nothing is shared between imports.

pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod providers;

pub use builder::{ImportResult, ProviderKind, RecipeImporter, RecipeImporterBuilder};
pub use crate::config::ImportConfig;
pub use error::ImportError;
pub use extractors::{RecipeScraper, SiteMetadataExtractor, StructuredRecipeExtractor};
pub use model::{ExtractedIngredient, ExtractedRecipeData, RawScrapeResult, SiteMetadata, Unit};

use providers::ProviderFactory;

/// Extract metadata for registering a recipe website.
///
/// Uses configuration from `config.toml` and the environment.
pub async fn extract_site_metadata(url: &str) -> Result<SiteMetadata, ImportError> {
    let config = ImportConfig::load()?;
    SiteMetadataExtractor::new(&config)?.extract(url).await
}

/// Scrape a recipe page into raw name + ingredient text.
pub async fn scrape_recipe(url: &str) -> Result<RawScrapeResult, ImportError> {
    let config = ImportConfig::load()?;
    RecipeScraper::new(&config)?.scrape(url).await
}

/// Extract a structured recipe from free text with the configured default provider.
pub async fn extract_structured_recipe(text: &str) -> Result<ExtractedRecipeData, ImportError> {
    let config = ImportConfig::load()?;
    let provider = ProviderFactory::get_default_provider(&config)?;
    StructuredRecipeExtractor::new(provider).extract(text).await
}

/// Scrape `url` and extract a structured recipe from it.
pub async fn import_from_url(url: &str) -> Result<ExtractedRecipeData, ImportError> {
    match RecipeImporter::builder().url(url).build().await? {
        ImportResult::Recipe(recipe) => Ok(recipe),
        ImportResult::Raw(_) => Err(ImportError::BuilderError(
            "Expected a structured recipe".to_string(),
        )),
    }
}
