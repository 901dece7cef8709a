use crate::error::RuleError;
use crate::scrapers::extractor::RuleScraper;
use crate::scrapers::traits::SiteScraper;
use crate::scrapers::types::SiteRules;
use crate::scrapers::Site;
use tracing::debug;

/// Ordered set of site scrapers; the first one whose `matches` is true claims a URL
pub struct Dispatcher {
    scrapers: Vec<Box<dyn SiteScraper>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            scrapers: Vec::new(),
        }
    }

    /// Dispatcher over every built-in site
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_rules(&Site::ALL.map(Site::rules))
    }

    pub fn from_rules(rules: &[SiteRules]) -> Result<Self, RuleError> {
        let mut dispatcher = Self::new();
        for site in rules {
            dispatcher.register(Box::new(RuleScraper::from_rules(site)?));
        }
        Ok(dispatcher)
    }

    pub fn register(&mut self, scraper: Box<dyn SiteScraper>) {
        self.scrapers.push(scraper);
    }

    pub fn claim(&self, url: &str) -> Option<&dyn SiteScraper> {
        let claimed = self
            .scrapers
            .iter()
            .find(|s| s.matches(url))
            .map(|s| s.as_ref());

        if let Some(scraper) = claimed {
            debug!("{} claims {}", scraper.source_name(), url);
        }
        claimed
    }

    pub fn list_sources(&self) -> Vec<String> {
        self.scrapers
            .iter()
            .map(|s| s.source_name().to_string())
            .collect()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::rightmove;

    #[test]
    fn test_builtin_claims_each_site() {
        let dispatcher = Dispatcher::builtin().unwrap();

        let claimed = dispatcher
            .claim("https://www.rightmove.co.uk/property-to-rent/find.html?maxPrice=2000")
            .map(|s| s.source_name());
        assert_eq!(claimed, Some("Rightmove"));

        let claimed = dispatcher
            .claim("https://www.zoopla.co.uk/to-rent/property/london/")
            .map(|s| s.source_name());
        assert_eq!(claimed, Some("Zoopla"));
    }

    #[test]
    fn test_unrecognized_url_is_unclaimed() {
        let dispatcher = Dispatcher::builtin().unwrap();
        assert!(dispatcher.claim("https://www.example.com/rent").is_none());
        assert!(dispatcher
            .claim("https://www.rightmove.co.uk/property-to-rent/")
            .is_none());
    }

    #[test]
    fn test_configured_domain() {
        let mut rules = rightmove::rules();
        rules.url_pattern = "example-site-a.co.uk/property-to-rent/find.html".to_string();
        let dispatcher = Dispatcher::from_rules(&[rules]).unwrap();

        assert!(dispatcher
            .claim("https://www.example-site-a.co.uk/property-to-rent/find.html?maxPrice=2000")
            .is_some());
        assert!(dispatcher
            .claim("https://www.example-site-a.co.uk/property-to-rent/")
            .is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let mut first = rightmove::rules();
        first.name = "First".to_string();
        let mut second = rightmove::rules();
        second.name = "Second".to_string();
        let dispatcher = Dispatcher::from_rules(&[first, second]).unwrap();

        let claimed = dispatcher
            .claim("https://www.rightmove.co.uk/property-to-rent/find.html")
            .map(|s| s.source_name());
        assert_eq!(claimed, Some("First"));
        assert_eq!(dispatcher.list_sources(), vec!["First", "Second"]);
    }
}
