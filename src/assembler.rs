use crate::models::Properties;
use crate::scrapers::{Dispatcher, DocumentFetcher, SiteScraper};
use futures::stream::{self, StreamExt};
use scraper::Html;
use tracing::{debug, info, warn};

/// A URL whose document could not be retrieved
#[derive(Debug)]
pub struct FetchFailure {
    pub url: String,
    pub error: anyhow::Error,
}

/// Result of one polling cycle over a list of search URLs
#[derive(Debug, Default)]
pub struct Assembly {
    pub properties: Properties,
    pub failures: Vec<FetchFailure>,
}

impl Assembly {
    /// Treat any fetch failure as fatal for the whole cycle
    pub fn into_result(self) -> anyhow::Result<Properties> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure
                .error
                .context(format!("Failed to process {}", failure.url))),
            None => Ok(self.properties),
        }
    }
}

enum Outcome {
    Skipped,
    Extracted(Properties),
    Failed(FetchFailure),
}

/// Dispatches each URL, fetches it and concatenates the extracted listings
pub struct Assembler<F> {
    dispatcher: Dispatcher,
    fetcher: F,
    concurrency: usize,
}

impl<F: DocumentFetcher> Assembler<F> {
    pub fn new(dispatcher: Dispatcher, fetcher: F) -> Self {
        Self {
            dispatcher,
            fetcher,
            concurrency: 1,
        }
    }

    /// Number of URLs fetched at once; results keep URL input order regardless
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn assemble(&self, urls: &[String]) -> Assembly {
        let outcomes: Vec<Outcome> = stream::iter(urls)
            .map(|url| self.process(url))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut assembly = Assembly::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Skipped => {}
                Outcome::Extracted(mut properties) => assembly.properties.append(&mut properties),
                Outcome::Failed(failure) => assembly.failures.push(failure),
            }
        }

        info!(
            "Assembled {} properties from {} URLs ({} failed)",
            assembly.properties.len(),
            urls.len(),
            assembly.failures.len()
        );
        assembly
    }

    async fn process(&self, url: &str) -> Outcome {
        let Some(scraper) = self.dispatcher.claim(url) else {
            debug!("No site claims {}, skipping", url);
            return Outcome::Skipped;
        };

        match self.fetcher.fetch(url).await {
            Ok(body) => {
                let properties = extract_body(scraper, &body);
                info!("Found {} listings from {}", properties.len(), scraper.source_name());
                Outcome::Extracted(properties)
            }
            Err(error) => {
                warn!("Failed to fetch {}: {:#}", url, error);
                Outcome::Failed(FetchFailure {
                    url: url.to_string(),
                    error,
                })
            }
        }
    }
}

fn extract_body(scraper: &dyn SiteScraper, body: &str) -> Properties {
    let document = Html::parse_document(body);
    scraper.extract(&document)
}
