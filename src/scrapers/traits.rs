use crate::models::Properties;
use anyhow::Result;
use async_trait::async_trait;
use scraper::Html;

/// Common trait for all listing sites
/// New sites plug in here without touching the dispatcher or assembler
pub trait SiteScraper: Send + Sync {
    /// Whether this site claims the given search URL
    fn matches(&self, url: &str) -> bool;

    /// Extract one property per listing container, in document order
    fn extract(&self, document: &Html) -> Properties;

    /// Get the name of the site
    fn source_name(&self) -> &str;
}

/// Retrieves the raw markup behind a URL
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}
