use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One rental listing as extracted from a search results page.
///
/// Every field is textual and never absent: a missing node yields `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Hex digest of `url`, used by consumers as a deduplication key
    pub identity_hash: String,
    pub url: String,
    pub path: String,
    pub kind: String,
    pub price_raw: String,
    pub price_per_month: String,
    pub price_per_week: String,
    pub location: String,
    pub photo_url: String,
    pub summary: String,
    pub date_added: String,
}

/// Listings in document order, then URL input order.
pub type Properties = Vec<Property>;

/// Deterministic digest of a listing URL.
pub fn identity_hash(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}
