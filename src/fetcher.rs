use crate::config::ImportConfig;
use crate::error::ImportError;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

/// Parse `input` as an absolute http(s) URL.
///
/// Runs before any network access, so a malformed URL never reaches the wire.
pub fn parse_absolute_url(input: &str) -> Result<Url, ImportError> {
    let url = Url::parse(input.trim())
        .map_err(|e| ImportError::InvalidUrl(format!("{input}: {e}")))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        scheme => Err(ImportError::InvalidUrl(format!(
            "{input}: unsupported scheme '{scheme}'"
        ))),
    }
}

/// Fetches pages with a browser user agent. One GET per call, no retries.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ImportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ImportError::FetchFailed(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ImportConfig) -> Result<Self, ImportError> {
        Self::new(config.timeout(), &config.user_agent)
    }

    pub async fn fetch(&self, url: &Url) -> Result<String, ImportError> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ImportError::FetchFailed(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::FetchFailed(format!(
                "{url} returned status {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ImportError::FetchFailed(format!("{url}: {e}")))
    }
}
