pub mod dispatch;
pub mod extractor;
pub mod rightmove;
pub mod text;
pub mod traits;
pub mod types;
pub mod zoopla;

pub use dispatch::Dispatcher;
pub use extractor::RuleScraper;
pub use traits::{DocumentFetcher, SiteScraper};
pub use types::SiteRules;

/// Sites supported out of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Rightmove,
    Zoopla,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::Rightmove, Site::Zoopla];

    /// Default extraction rules for this site
    pub fn rules(self) -> SiteRules {
        match self {
            Site::Rightmove => rightmove::rules(),
            Site::Zoopla => zoopla::rules(),
        }
    }
}
