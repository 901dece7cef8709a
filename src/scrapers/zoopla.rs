use crate::scrapers::types::{DateRule, SitePatterns, SiteRules, SiteSelectors};

/// Zoopla rental search results
pub fn rules() -> SiteRules {
    SiteRules {
        name: "Zoopla".to_string(),
        url_pattern: "zoopla.co.uk/to-rent/property".to_string(),
        base_url: "http://www.zoopla.co.uk".to_string(),
        selectors: SiteSelectors {
            listing: "ul.listing-results > li".to_string(),
            link: ".listing-results-price.text-price".to_string(),
            price: ".listing-results-price.text-price".to_string(),
            kind: ".listing-results-attr a".to_string(),
            location: ".listing-results-address".to_string(),
            photo: "img[itemprop='photo']".to_string(),
            summary: "p[itemprop='description']".to_string(),
            date_added: ".listing_sort_copy".to_string(),
        },
        patterns: SitePatterns {
            href_strip: None,
            price_per_month: r"^(.+) pcm".to_string(),
            price_per_week: r"\((.+) pw\)$".to_string(),
            summary_suffix: Some(r"More details$".to_string()),
            date_added: DateRule::StripPrefix(r"^Added on ".to_string()),
        },
        kind_contains_location: false,
        price_first_only: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::identity_hash;
    use crate::scrapers::extractor::RuleScraper;
    use crate::scrapers::traits::SiteScraper;
    use scraper::Html;

    fn scraper() -> RuleScraper {
        RuleScraper::from_rules(&rules()).unwrap()
    }

    fn test_doc() -> Html {
        Html::parse_document(include_str!("../../tests/fixtures/zoopla.html"))
    }

    #[test]
    fn test_matches() {
        let valid = [
            "zoopla.co.uk/to-rent/property",
            "http://zoopla.co.uk/to-rent/property/london/?q=garden",
            "https://zoopla.co.uk/to-rent/property",
            "http://www.zoopla.co.uk/to-rent/property",
            "https://www.zoopla.co.uk/to-rent/property/london/?q=garden",
        ];
        let invalid = [
            "zoopla.co.uk",
            "zoopla.co.uk/to-rent/",
            "http://www.zoopla.co.uk/",
            "https://www.zoopla.co.uk/",
            "https://www.zoopla.co.uk/to-rent/",
        ];

        let scraper = scraper();
        for url in valid {
            assert!(scraper.matches(url), "{} should match", url);
        }
        for url in invalid {
            assert!(!scraper.matches(url), "{} should not match", url);
        }
    }

    #[test]
    fn test_nested_lists_are_not_listings() {
        assert_eq!(scraper().extract(&test_doc()).len(), 3);
    }

    #[test]
    fn test_extract_first_listing() {
        let properties = scraper().extract(&test_doc());
        let property = &properties[0];

        assert_eq!(property.path, "/to-rent/details/34745589");
        assert_eq!(property.url, "http://www.zoopla.co.uk/to-rent/details/34745589");
        assert_eq!(property.identity_hash, identity_hash(&property.url));
        assert_eq!(property.kind, "2 bed flat to rent");
        assert_eq!(property.price_raw, "£1,668 pcm (£385 pw)");
        assert_eq!(property.price_per_month, "£1,668");
        assert_eq!(property.price_per_week, "£385");
        assert_eq!(
            property.location,
            "Purves Road, Kensal Green, London, Greater London NW10"
        );
        assert_eq!(
            property.photo_url,
            "http://li.zoocdn.com/1e0514b9bfb5711721890d4754e288242c3a4189_150_113.jpg"
        );
        assert_eq!(
            property.summary,
            "Top floor Victorian flat with period features and modern interior. Minutes walk from Chamberlayne ..."
        );
        assert_eq!(property.date_added, "5th Oct 2014");
    }

    #[test]
    fn test_document_order_is_kept() {
        let paths: Vec<String> = scraper()
            .extract(&test_doc())
            .into_iter()
            .map(|p| p.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "/to-rent/details/34745589",
                "/to-rent/details/34743127",
                "/to-rent/details/34737114",
            ]
        );
    }

    #[test]
    fn test_unpriced_listing_falls_back_to_raw() {
        let properties = scraper().extract(&test_doc());
        let property = &properties[2];

        assert_eq!(property.price_raw, "POA");
        assert_eq!(property.price_per_month, "POA");
        assert_eq!(property.price_per_week, "POA");
        assert_eq!(property.photo_url, "");
        assert_eq!(property.summary, "Three bedroom first floor flat.");
        assert_eq!(property.date_added, "");
    }
}
