use super::{element_text, first_match, first_text, Probe};
use crate::config::{ImportConfig, ScraperConfig};
use crate::error::ImportError;
use crate::fetcher::{parse_absolute_url, RequestFetcher};
use crate::model::RawScrapeResult;
use log::{debug, info};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::time::Duration;

const NAME_PROBES: &[Probe] = &[recipe_heading, recipe_title_class, any_heading, page_title];

/// Selector groups that hint at ingredient markup, most specific first.
const INGREDIENT_SELECTORS: &[&str] = &[
    r#"[class*="ingredients"]"#,
    r#"[class*="ingredient"]"#,
    r#"[itemprop="recipeIngredient"]"#,
    r#"[data-testid*="ingredient"]"#,
    r#"ul[class*="Ingredient"], ol[class*="Ingredient"]"#,
];

const CONTENT_SELECTORS: &[&str] = &["main", r#"[class*="content"]"#];

fn recipe_heading(document: &Html) -> Option<String> {
    first_text(document, r#"h1[class*="recipe"], h1[class*="title"]"#)
}

fn recipe_title_class(document: &Html) -> Option<String> {
    first_text(document, ".recipe-title, .recipe-name")
}

fn any_heading(document: &Html) -> Option<String> {
    first_text(document, "h1")
}

fn page_title(document: &Html) -> Option<String> {
    first_text(document, "title")
}

#[derive(Debug, PartialEq)]
enum Section {
    /// Text that came from ingredient-like markup or an ingredient-shaped list
    Ingredients(String),
    /// A raw sample of the page's main content
    Content(String),
}

/// Drop matches nested inside other matches so their text is not repeated.
fn outermost<'a>(elements: Vec<ElementRef<'a>>) -> Vec<ElementRef<'a>> {
    let ids: HashSet<_> = elements.iter().map(|el| (**el).id()).collect();
    elements
        .into_iter()
        .filter(|el| !(**el).ancestors().any(|ancestor| ids.contains(&ancestor.id())))
        .collect()
}

/// Ingredient text for one selector group.
///
/// List items inside the matched elements win; otherwise the matched
/// elements' own text is used.
fn ingredient_text(document: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    let items_selector = Selector::parse("li").ok()?;

    let matched = outermost(document.select(&selector).collect());
    if matched.is_empty() {
        return None;
    }

    let items: Vec<String> = matched
        .iter()
        .flat_map(|el| el.select(&items_selector))
        .map(|li| element_text(&li))
        .filter(|text| !text.is_empty())
        .collect();
    if !items.is_empty() {
        debug!("Found {} ingredient items using '{}'", items.len(), css);
        return Some(items.join("\n"));
    }

    let texts: Vec<String> = matched
        .iter()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();
    if texts.is_empty() {
        None
    } else {
        debug!("Found ingredient text using '{}'", css);
        Some(texts.join("\n"))
    }
}

/// Scrapes a recipe page into a [`RawScrapeResult`].
pub struct RecipeScraper {
    fetcher: RequestFetcher,
    settings: ScraperConfig,
}

impl RecipeScraper {
    pub fn new(config: &ImportConfig) -> Result<Self, ImportError> {
        Self::with_timeout(config, config.timeout())
    }

    /// Like [`RecipeScraper::new`], with a request timeout other than the configured one.
    pub fn with_timeout(config: &ImportConfig, timeout: Duration) -> Result<Self, ImportError> {
        Ok(Self {
            fetcher: RequestFetcher::new(timeout, &config.user_agent)?,
            settings: config.scraper.clone(),
        })
    }

    /// Fetch `url` and scrape it.
    ///
    /// Fails with `InvalidUrl` before any request when `url` is malformed,
    /// `FetchFailed` when the page cannot be retrieved and `NoRecipeDataFound`
    /// when neither a name nor any ingredient text could be located.
    pub async fn scrape(&self, url: &str) -> Result<RawScrapeResult, ImportError> {
        let page_url = parse_absolute_url(url)?;
        let html = self.fetcher.fetch(&page_url).await?;
        let result = self.scrape_html(&html)?;
        info!("Scraped {} characters from {}", result.as_str().len(), page_url);
        Ok(result)
    }

    /// Scrape an already fetched page.
    pub fn scrape_html(&self, html: &str) -> Result<RawScrapeResult, ImportError> {
        let document = Html::parse_document(html);

        let name = first_match(&document, NAME_PROBES);
        let section = self.find_section(&document);

        let mut output = String::new();
        if let Some(name) = name {
            debug!("Recipe name: {}", name);
            output.push_str(&format!("Recipe Name: {name}\n\n"));
        }
        match section {
            Some(Section::Ingredients(text)) => output.push_str(&format!("Ingredients:\n{text}")),
            Some(Section::Content(text)) => output.push_str(&format!("Recipe Content:\n{text}")),
            None => {}
        }

        if output.is_empty() {
            return Err(ImportError::NoRecipeDataFound);
        }
        Ok(RawScrapeResult::new(output))
    }

    fn find_section(&self, document: &Html) -> Option<Section> {
        if let Some(text) = INGREDIENT_SELECTORS
            .iter()
            .find_map(|css| ingredient_text(document, css))
        {
            return Some(Section::Ingredients(text));
        }

        if let Some(text) = self.list_fallback(document) {
            return Some(Section::Ingredients(text));
        }

        self.content_sample(document).map(Section::Content)
    }

    /// First of the leading lists whose item count falls inside the
    /// configured band. Short lists tend to be menus, long ones indexes.
    fn list_fallback(&self, document: &Html) -> Option<String> {
        let lists = Selector::parse("ul, ol").ok()?;
        let items_selector = Selector::parse("li").ok()?;
        let band = self.settings.min_list_items..=self.settings.max_list_items;

        document
            .select(&lists)
            .take(self.settings.candidate_lists)
            .find_map(|list| {
                let items: Vec<String> = list
                    .select(&items_selector)
                    .map(|li| element_text(&li))
                    .collect();
                if !band.contains(&items.len()) {
                    return None;
                }

                let text = items
                    .into_iter()
                    .filter(|item| !item.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
                (!text.is_empty()).then(|| {
                    debug!("Using bare list fallback");
                    text
                })
            })
    }

    fn content_sample(&self, document: &Html) -> Option<String> {
        let text = CONTENT_SELECTORS
            .iter()
            .find_map(|css| first_text(document, css))?;
        debug!("Using main content sample");

        let sample: String = text.chars().take(self.settings.content_sample_chars).collect();
        Some(sample.trim_end().to_string())
    }
}
