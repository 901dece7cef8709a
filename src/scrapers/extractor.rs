use crate::error::RuleError;
use crate::models::{identity_hash, Properties, Property};
use crate::scrapers::text;
use crate::scrapers::traits::SiteScraper;
use crate::scrapers::types::{DateRule, SiteRules};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

struct CompiledSelectors {
    listing: Selector,
    link: Selector,
    price: Selector,
    kind: Selector,
    location: Selector,
    photo: Selector,
    summary: Selector,
    date_added: Selector,
}

enum CompiledDateRule {
    Capture(Regex),
    StripPrefix(Regex),
}

/// Site scraper driven entirely by a compiled `SiteRules`
pub struct RuleScraper {
    name: String,
    url_pattern: String,
    base_url: String,
    kind_contains_location: bool,
    price_first_only: bool,
    selectors: CompiledSelectors,
    href_strip: Option<Regex>,
    price_per_month: Regex,
    price_per_week: Regex,
    summary_suffix: Option<Regex>,
    date_added: CompiledDateRule,
}

impl RuleScraper {
    /// Compile selectors and patterns once, up front
    pub fn from_rules(rules: &SiteRules) -> Result<Self, RuleError> {
        let site = rules.name.as_str();
        let s = &rules.selectors;
        let p = &rules.patterns;

        let selectors = CompiledSelectors {
            listing: compile_selector(site, &s.listing)?,
            link: compile_selector(site, &s.link)?,
            price: compile_selector(site, &s.price)?,
            kind: compile_selector(site, &s.kind)?,
            location: compile_selector(site, &s.location)?,
            photo: compile_selector(site, &s.photo)?,
            summary: compile_selector(site, &s.summary)?,
            date_added: compile_selector(site, &s.date_added)?,
        };

        let date_added = match &p.date_added {
            DateRule::Capture(pattern) => {
                CompiledDateRule::Capture(compile_pattern(site, pattern)?)
            }
            DateRule::StripPrefix(pattern) => {
                CompiledDateRule::StripPrefix(compile_pattern(site, pattern)?)
            }
        };

        Ok(Self {
            name: rules.name.clone(),
            url_pattern: rules.url_pattern.clone(),
            base_url: rules.base_url.clone(),
            kind_contains_location: rules.kind_contains_location,
            price_first_only: rules.price_first_only,
            selectors,
            href_strip: p
                .href_strip
                .as_deref()
                .map(|r| compile_pattern(site, r))
                .transpose()?,
            price_per_month: compile_pattern(site, &p.price_per_month)?,
            price_per_week: compile_pattern(site, &p.price_per_week)?,
            summary_suffix: p
                .summary_suffix
                .as_deref()
                .map(|r| compile_pattern(site, r))
                .transpose()?,
            date_added,
        })
    }

    fn extract_property(&self, listing: ElementRef) -> Property {
        let path = self.extract_path(listing);
        let url = format!("{}{}", self.base_url, path);
        let price_raw = self.extract_price(listing);
        let location = all_text(listing, &self.selectors.location).trim().to_string();

        Property {
            identity_hash: identity_hash(&url),
            url,
            path,
            kind: self.extract_kind(listing, &location),
            price_per_month: text::capture_or_raw(&self.price_per_month, &price_raw),
            price_per_week: text::capture_or_raw(&self.price_per_week, &price_raw),
            price_raw,
            location,
            photo_url: attr(listing, &self.selectors.photo, "src"),
            summary: self.extract_summary(listing),
            date_added: self.extract_date_added(listing),
        }
    }

    fn extract_path(&self, listing: ElementRef) -> String {
        let href = attr(listing, &self.selectors.link, "href");
        match &self.href_strip {
            Some(pattern) => pattern.replace_all(&href, "").into_owned(),
            None => href,
        }
    }

    fn extract_price(&self, listing: ElementRef) -> String {
        let price = if self.price_first_only {
            listing
                .select(&self.selectors.price)
                .next()
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default()
        } else {
            all_text(listing, &self.selectors.price)
        };
        text::collapse_whitespace(&price)
    }

    fn extract_kind(&self, listing: ElementRef, location: &str) -> String {
        let kind = all_text(listing, &self.selectors.kind);
        if self.kind_contains_location {
            text::remove_first(kind.trim(), location)
        } else {
            kind.trim().to_string()
        }
    }

    fn extract_summary(&self, listing: ElementRef) -> String {
        let summary = all_text(listing, &self.selectors.summary);
        match &self.summary_suffix {
            Some(pattern) => text::strip_pattern(pattern, summary.trim()),
            None => summary.trim().to_string(),
        }
    }

    fn extract_date_added(&self, listing: ElementRef) -> String {
        let blurb = all_text(listing, &self.selectors.date_added);
        let blurb = blurb.trim();
        match &self.date_added {
            CompiledDateRule::Capture(pattern) => text::capture_or_empty(pattern, blurb),
            CompiledDateRule::StripPrefix(pattern) => text::strip_pattern(pattern, blurb),
        }
    }
}

impl SiteScraper for RuleScraper {
    fn matches(&self, url: &str) -> bool {
        url.contains(&self.url_pattern)
    }

    fn extract(&self, document: &Html) -> Properties {
        let properties: Properties = document
            .select(&self.selectors.listing)
            .map(|listing| self.extract_property(listing))
            .collect();

        debug!("Extracted {} listings from {} document", properties.len(), self.name);
        properties
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

/// Concatenated text of every match, like reading a whole selection
fn all_text(scope: ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .flat_map(|el| el.text())
        .collect()
}

/// Attribute of the first match, or an empty string
fn attr(scope: ElementRef, selector: &Selector, name: &str) -> String {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(name))
        .unwrap_or_default()
        .to_string()
}

fn compile_selector(site: &str, css: &str) -> Result<Selector, RuleError> {
    Selector::parse(css).map_err(|e| RuleError::Selector {
        site: site.to_string(),
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

fn compile_pattern(site: &str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::Pattern {
        site: site.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}
