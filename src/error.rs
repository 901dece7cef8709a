use thiserror::Error;

/// Failure to turn a `SiteRules` into a working extractor.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid selector `{selector}` for {site}: {reason}")]
    Selector {
        site: String,
        selector: String,
        reason: String,
    },

    #[error("invalid pattern `{pattern}` for {site}")]
    Pattern {
        site: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
