//! Reqwest-backed page fetcher with scraper-based text extraction

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use super::{FetchError, FetchedPage, PageFetcher};
use crate::model::{FetchConfig, UrlMetadata};

static SCRIPT_AND_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script>|<style\b[^>]*>.*?</style>").unwrap()
});

/// Fetcher for public web pages
pub struct WebPageFetcher {
    client: Client,
    config: FetchConfig,
}

impl WebPageFetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent("trustlens-agent/1.0")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Extract title from <title> or <meta property="og:title">
    fn extract_title(document: &Html) -> Option<String> {
        if let Ok(selector) = Selector::parse("title") {
            if let Some(el) = document.select(&selector).next() {
                let title = el.text().collect::<String>().trim().to_string();
                if !title.is_empty() {
                    return Some(title);
                }
            }
        }

        let selector = Selector::parse(r#"meta[property="og:title"]"#).ok()?;
        document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Collect hrefs that carry contact or social information. These live in
    /// link attributes and would be lost when tags are stripped.
    fn extract_link_targets(document: &Html) -> Vec<String> {
        let mut targets = Vec::new();
        if let Ok(selector) = Selector::parse("a[href]") {
            for el in document.select(&selector) {
                if let Some(href) = el.value().attr("href") {
                    let lower = href.to_lowercase();
                    if lower.starts_with("mailto:") || lower.starts_with("tel:") {
                        targets.push(href.to_string());
                    } else if lower.contains("linkedin.com")
                        || lower.contains("/contact")
                        || lower.contains("/about")
                    {
                        targets.push(href.to_string());
                    }
                }
            }
        }
        targets.dedup();
        targets
    }

    fn page_text(raw_html: &str) -> String {
        let stripped = SCRIPT_AND_STYLE.replace_all(raw_html, " ");
        let document = Html::parse_document(&stripped);

        let mut text = document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ");
        for target in Self::extract_link_targets(&document) {
            text.push(' ');
            text.push_str(&target);
        }

        // Collapse the whitespace runs left behind by stripped markup
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[async_trait]
impl PageFetcher for WebPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        if !self.config.is_url_allowed(url) {
            tracing::debug!(url = %url, "URL blocked by configuration");
            return Err(FetchError::Blocked(url.to_string()));
        }

        tracing::debug!(url = %url, "Fetching page");
        let response = self.client.get(url.as_str()).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !response.status().is_success() {
            return Err(FetchError::Status(
                response.status().as_u16(),
                url.to_string(),
            ));
        }

        let final_url = response.url().clone();
        let raw_html = response.text().await?;

        let document = Html::parse_document(&raw_html);
        let page_title = Self::extract_title(&document);
        let text = Self::page_text(&raw_html);

        let metadata = UrlMetadata {
            domain: final_url.host_str().unwrap_or_default().to_string(),
            is_https: final_url.scheme() == "https",
            page_title,
        };

        Ok(FetchedPage {
            url: final_url,
            metadata,
            text,
        })
    }
}
