use super::{first_attr, first_match, first_text, Probe};
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::fetcher::{parse_absolute_url, RequestFetcher};
use crate::model::SiteMetadata;
use log::{debug, info};
use reqwest::Url;
use scraper::Html;

const NAME_PROBES: &[Probe] = &[og_site_name, og_title, page_title];

const DESCRIPTION_PROBES: &[Probe] = &[og_description, meta_description];

const LOGO_PROBES: &[Probe] = &[
    apple_touch_icon,
    shortcut_icon,
    icon,
    header_image,
    banner_image,
    logo_image,
];

fn og_site_name(document: &Html) -> Option<String> {
    first_attr(document, r#"meta[property="og:site_name"]"#, "content")
}

fn og_title(document: &Html) -> Option<String> {
    first_attr(document, r#"meta[property="og:title"]"#, "content")
}

fn page_title(document: &Html) -> Option<String> {
    first_text(document, "title")
}

fn og_description(document: &Html) -> Option<String> {
    first_attr(document, r#"meta[property="og:description"]"#, "content")
}

fn meta_description(document: &Html) -> Option<String> {
    first_attr(document, r#"meta[name="description"]"#, "content")
}

fn og_image(document: &Html) -> Option<String> {
    first_attr(document, r#"meta[property="og:image"]"#, "content")
}

fn apple_touch_icon(document: &Html) -> Option<String> {
    first_attr(document, r#"link[rel="apple-touch-icon"]"#, "href")
}

fn shortcut_icon(document: &Html) -> Option<String> {
    first_attr(document, r#"link[rel="shortcut icon"]"#, "href")
}

fn icon(document: &Html) -> Option<String> {
    first_attr(document, r#"link[rel="icon"]"#, "href")
}

fn header_image(document: &Html) -> Option<String> {
    first_attr(document, "header img", "src")
}

fn banner_image(document: &Html) -> Option<String> {
    first_attr(document, r#"[role="banner"] img"#, "src")
}

fn logo_image(document: &Html) -> Option<String> {
    first_attr(document, r#"[class*="logo"] img, img[class*="logo"]"#, "src")
}

/// Resolve a possibly relative reference against the page origin.
///
/// Only http(s) results count; `data:` URIs and other schemes are rejected.
fn resolve_image(page_url: &Url, reference: &str) -> Option<String> {
    let origin = Url::parse(&page_url.origin().ascii_serialization()).ok()?;
    let resolved = origin.join(reference).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved.to_string()),
        _ => None,
    }
}

fn host_name(page_url: &Url) -> String {
    let host = page_url.host_str().unwrap_or_default();
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// Extracts name, description, hero image and logo of a recipe website.
pub struct SiteMetadataExtractor {
    fetcher: RequestFetcher,
    placeholder_image_url: String,
}

impl SiteMetadataExtractor {
    pub fn new(config: &ImportConfig) -> Result<Self, ImportError> {
        Ok(Self {
            fetcher: RequestFetcher::from_config(config)?,
            placeholder_image_url: config.placeholder_image_url.clone(),
        })
    }

    /// Fetch `url` and extract its site metadata.
    ///
    /// Fails with `InvalidUrl` before any request when `url` is malformed, and
    /// with `FetchFailed` when the page cannot be retrieved.
    pub async fn extract(&self, url: &str) -> Result<SiteMetadata, ImportError> {
        let page_url = parse_absolute_url(url)?;
        let html = self.fetcher.fetch(&page_url).await?;
        let metadata = self.extract_from_html(&html, &page_url);
        info!("Extracted site metadata for {}: {}", page_url, metadata.name);
        Ok(metadata)
    }

    /// Extract site metadata from an already fetched page.
    pub fn extract_from_html(&self, html: &str, page_url: &Url) -> SiteMetadata {
        let document = Html::parse_document(html);

        let name = first_match(&document, NAME_PROBES).unwrap_or_else(|| host_name(page_url));
        let description = first_match(&document, DESCRIPTION_PROBES).unwrap_or_default();

        let image_url = og_image(&document)
            .and_then(|reference| resolve_image(page_url, &reference))
            .unwrap_or_else(|| self.placeholder_image_url.clone());

        let logo_url = first_match(&document, LOGO_PROBES)
            .and_then(|reference| resolve_image(page_url, &reference))
            .unwrap_or_else(|| self.placeholder_image_url.clone());

        debug!("Site image: {}, logo: {}", image_url, logo_url);

        SiteMetadata {
            name,
            description,
            image_url,
            logo_url,
        }
    }
}
