use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Descriptive metadata for a recipe website.
///
/// Every field is populated; image fields fall back to the configured
/// placeholder image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "logoURL")]
    pub logo_url: String,
}

/// Free-form text produced by the content scraper.
///
/// Holds an optional `Recipe Name:` line followed by either an
/// `Ingredients:` or a `Recipe Content:` section. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScrapeResult(String);

impl RawScrapeResult {
    pub(crate) fn new(text: String) -> Self {
        RawScrapeResult(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RawScrapeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed unit vocabulary accepted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    G,
    Kg,
    Ml,
    L,
    Tbsp,
    Tsp,
    Piece,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::G,
        Unit::Kg,
        Unit::Ml,
        Unit::L,
        Unit::Tbsp,
        Unit::Tsp,
        Unit::Piece,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Ml => "ml",
            Unit::L => "l",
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
            Unit::Piece => "piece",
        }
    }

    /// The vocabulary as a comma-separated list, e.g. for prompts and messages.
    pub fn vocabulary() -> String {
        Unit::ALL
            .iter()
            .map(Unit::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    /// Exact, case-sensitive match against the vocabulary. No aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .find(|unit| unit.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unit '{s}' is not one of {}", Unit::vocabulary()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
}

/// A recipe as handed to the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecipeData {
    pub name: String,
    pub ingredients: Vec<ExtractedIngredient>,
}
