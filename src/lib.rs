//! Steam storefront SDK for Rust.
//!
//! Fetches public app listings from the storefront `appdetails` endpoint and
//! aggregates them into compact reports: core listing fields, resolved DLC
//! summaries with a price total, and any bundled package offers.
//!
//! # Quick start
//!
//! ```no_run
//! use steamstore_sdk::SteamStoreSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = SteamStoreSdk::builder().build().unwrap();
//!
//!     // Aggregate one app's listing, DLC, and sub-offers
//!     let report = sdk.apps().aggregate(2483190).await;
//!
//!     // Render it to stdout (prints nothing if the listing was absent)
//!     steamstore_sdk::report::print(report.as_ref()).unwrap();
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod report;

pub use client::StoreClient;
pub use config::Locale;
pub use error::{Result, StoreError};
pub use models::AppReport;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// SteamStoreSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SteamStoreSdk`] instance.
///
/// Use [`SteamStoreSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SteamStoreSdkBuilder::build).
pub struct SteamStoreSdkBuilder {
    base_url: String,
    locale: Locale,
    timeout: Duration,
    max_concurrency: usize,
    include_sub_offers: bool,
}

impl Default for SteamStoreSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::STOREFRONT_BASE.to_string(),
            locale: Locale::default(),
            timeout: config::DEFAULT_TIMEOUT,
            max_concurrency: config::DEFAULT_MAX_CONCURRENCY,
            include_sub_offers: true,
        }
    }
}

impl SteamStoreSdkBuilder {
    /// Override the storefront base URL.
    ///
    /// Defaults to the public storefront API. Mainly useful for pointing the
    /// SDK at a mock server in tests.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the locale (country code + language) sent with every request.
    ///
    /// The locale fixes the pricing currency and text language of every
    /// listing fetched through this SDK. Defaults to `fr`/`fr`.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cap how many DLC listing fetches run in flight at once.
    ///
    /// Defaults to 4; values below 1 are treated as 1.
    pub fn max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Enable or disable sub-offer extraction from package groups.
    ///
    /// When disabled, aggregated reports carry an empty `subs` list.
    /// Defaults to `true`.
    pub fn include_sub_offers(mut self, include: bool) -> Self {
        self.include_sub_offers = include;
        self
    }

    /// Build the SDK, constructing the underlying HTTP client.
    pub fn build(self) -> Result<SteamStoreSdk> {
        let client = StoreClient::new(self.base_url, self.locale, self.timeout)?;
        Ok(SteamStoreSdk {
            client,
            max_concurrency: self.max_concurrency,
            include_sub_offers: self.include_sub_offers,
        })
    }
}

// ---------------------------------------------------------------------------
// SteamStoreSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Wraps a [`StoreClient`] and exposes the aggregation operations as
/// lightweight borrowing query interfaces. Holds no mutable state; every
/// operation is an independent, idempotent fetch.
pub struct SteamStoreSdk {
    client: StoreClient,
    max_concurrency: usize,
    include_sub_offers: bool,
}

impl SteamStoreSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SteamStoreSdkBuilder {
        SteamStoreSdkBuilder::default()
    }

    /// Access the app aggregation interface.
    pub fn apps(&self) -> queries::apps::AppQuery<'_> {
        queries::apps::AppQuery::new(&self.client, self.max_concurrency, self.include_sub_offers)
    }

    /// Access the DLC resolution interface.
    pub fn dlc(&self) -> queries::dlc::DlcQuery<'_> {
        queries::dlc::DlcQuery::new(&self.client, self.max_concurrency)
    }

    /// Return a reference to the underlying [`StoreClient`] for advanced usage.
    pub fn client(&self) -> &StoreClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SteamStoreSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locale = self.client.locale();
        write!(
            f,
            "SteamStoreSdk(base_url={}, locale={}/{}, max_concurrency={})",
            self.client.base_url(),
            locale.country_code,
            locale.language,
            self.max_concurrency
        )
    }
}
