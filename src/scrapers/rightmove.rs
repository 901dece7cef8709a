use crate::scrapers::types::{DateRule, SitePatterns, SiteRules, SiteSelectors};

/// Rightmove rental search results
pub fn rules() -> SiteRules {
    SiteRules {
        name: "Rightmove".to_string(),
        url_pattern: "rightmove.co.uk/property-to-rent/find.html".to_string(),
        base_url: "http://www.rightmove.co.uk".to_string(),
        selectors: SiteSelectors {
            listing: "#summaries > li.summary-list-item".to_string(),
            link: ".price-new a".to_string(),
            price: ".price-new a".to_string(),
            kind: ".bedrooms a".to_string(),
            location: ".details .displayaddress".to_string(),
            photo: ".photos .photo img".to_string(),
            summary: "p.description".to_string(),
            date_added: ".branchblurb".to_string(),
        },
        patterns: SitePatterns {
            // Session tokens appended to listing links
            href_strip: Some(r"/svr/\d+;.+$".to_string()),
            price_per_month: r"(£[0-9,]+) pcm$".to_string(),
            price_per_week: r"^(.+) pw".to_string(),
            summary_suffix: Some(r"More.details.›$".to_string()),
            date_added: DateRule::Capture(r"Added on (\d{2}/\d{2}/\d{4})".to_string()),
        },
        kind_contains_location: true,
        price_first_only: true,
    }
}
