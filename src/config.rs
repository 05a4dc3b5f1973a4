use std::time::Duration;

/// Base URL of the public storefront API. Individual listings are fetched
/// from `{STOREFRONT_BASE}/appdetails`.
pub const STOREFRONT_BASE: &str = "https://store.steampowered.com/api";

/// App id used by the `steamstore-report` binary for its sample run.
pub const SAMPLE_APP_ID: u64 = 2483190;

/// Default number of DLC listings fetched in flight at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Country code and language sent with every storefront request.
///
/// The storefront derives both the pricing currency and the text language
/// from these, so all listings fetched through one client share a consistent
/// currency and formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// ISO country code used as the `cc` query parameter (e.g. `"fr"`).
    pub country_code: String,
    /// Language code used as the `l` query parameter (e.g. `"fr"`).
    pub language: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            country_code: "fr".to_string(),
            language: "fr".to_string(),
        }
    }
}

impl Locale {
    pub fn new(country_code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            language: language.into(),
        }
    }
}
