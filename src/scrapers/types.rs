use serde::{Deserialize, Serialize};

/// Extraction rules for one listing site.
///
/// Kept as data so markup changes can be followed by editing configuration
/// instead of the extraction engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRules {
    /// Display name used in logs
    pub name: String,
    /// Substring a search URL must contain to be claimed by this site
    pub url_pattern: String,
    /// Origin prepended to the cleaned listing path
    pub base_url: String,
    /// Remove the extracted location from the kind text
    #[serde(default)]
    pub kind_contains_location: bool,
    /// Read the price from the first match only instead of joining every match
    #[serde(default)]
    pub price_first_only: bool,
    pub selectors: SiteSelectors,
    pub patterns: SitePatterns,
}

/// Structural queries. Everything except `listing` is scoped to one listing container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSelectors {
    pub listing: String,
    /// Anchor carrying the listing href
    pub link: String,
    pub price: String,
    pub kind: String,
    pub location: String,
    /// Image carrying the photo `src`
    pub photo: String,
    pub summary: String,
    pub date_added: String,
}

/// Regular expressions applied to extracted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePatterns {
    /// Trailing token removed from the href, e.g. a session id suffix
    #[serde(default)]
    pub href_strip: Option<String>,
    /// First capture group is the monthly price
    pub price_per_month: String,
    /// First capture group is the weekly price
    pub price_per_week: String,
    /// Boilerplate removed from the end of the summary
    #[serde(default)]
    pub summary_suffix: Option<String>,
    pub date_added: DateRule,
}

/// How the date added is pulled out of the metadata text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "pattern", rename_all = "snake_case")]
pub enum DateRule {
    /// Return the first capture group, or an empty string when nothing matches
    Capture(String),
    /// Remove the match and return what is left
    StripPrefix(String),
}
