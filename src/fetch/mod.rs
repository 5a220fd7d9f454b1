//! Page fetching for URL analysis and company verification

mod web;

use async_trait::async_trait;
use url::Url;

use crate::model::UrlMetadata;

pub use web::WebPageFetcher;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL blocked by configuration: {0}")]
    Blocked(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP {0}: {1}")]
    Status(u16, String),
}

/// A fetched page reduced to what the rule evaluator consumes: plain text
/// plus the connection metadata the URL-specific rules inspect.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    pub metadata: UrlMetadata,
    /// Visible page text with contact and social hrefs appended, so that
    /// pattern rules can see addresses that only appear in link attributes.
    pub text: String,
}

/// Trait for page fetchers, injected so the service layer stays testable
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}
