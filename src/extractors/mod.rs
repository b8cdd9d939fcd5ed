//! HTML and model-output extractors.
//!
//! The HTML side is built from ordered cascades of [`Probe`]s: plain
//! functions from a parsed document to an optional string, tried in order
//! until one yields something.

use scraper::{ElementRef, Html, Selector};

mod recipe_content;
mod site_metadata;
mod structured;

pub use recipe_content::RecipeScraper;
pub use site_metadata::SiteMetadataExtractor;
pub use structured::{parse_model_output, StructuredRecipeExtractor};

/// One step of a fallback cascade.
pub type Probe = fn(&Html) -> Option<String>;

/// Evaluate `probes` in order and return the first hit.
pub fn first_match(document: &Html, probes: &[Probe]) -> Option<String> {
    probes.iter().find_map(|probe| probe(document))
}

/// Text content of an element with runs of whitespace collapsed and trimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of the first element matching `css` whose text is non-empty.
pub(crate) fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    document
        .select(&selector)
        .map(|el| element_text(&el))
        .find(|text| !text.is_empty())
}

/// Trimmed value of `attr` on the first element matching `css` that carries
/// a non-empty one.
pub(crate) fn first_attr(document: &Html, css: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    document
        .select(&selector)
        .filter_map(|el| el.value().attr(attr))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(String::from)
}
