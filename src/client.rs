//! HTTP transport for the storefront `appdetails` endpoint.
//!
//! One request per app id — the endpoint is never batched. Responses are
//! JSON objects keyed by the stringified id, each entry carrying a `success`
//! flag and, on success, the listing payload.

use std::collections::HashMap;
use std::time::Duration;

use tracing::warn;

use crate::config::Locale;
use crate::error::Result;
use crate::models::{AppData, Listing};

/// HTTP client bound to one storefront base URL and locale.
///
/// Stateless between calls: every fetch is an independent GET whose locale
/// parameters come from the client's configuration.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    locale: Locale,
}

impl StoreClient {
    /// Build a client with the given base URL, locale, and request timeout.
    pub fn new(base_url: String, locale: Locale, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            locale,
        })
    }

    /// Fetch the listing for a single app id.
    ///
    /// Returns `Ok(Some(data))` when the response contains the id's entry,
    /// the entry is marked successful, and a data payload is present.
    /// Returns `Ok(None)` (with a warn diagnostic) when the entry is missing,
    /// unsuccessful, or empty. Transport and parse failures surface as `Err`.
    pub async fn app_details(&self, appid: u64) -> Result<Option<AppData>> {
        let url = format!("{}/appdetails", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("appids", appid.to_string()),
                ("cc", self.locale.country_code.clone()),
                ("l", self.locale.language.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = resp.text().await?;
        let mut listings: HashMap<String, Listing> = serde_json::from_str(&body)?;

        match listings.remove(&appid.to_string()) {
            None => {
                warn!(appid, "storefront response has no entry for app id");
                Ok(None)
            }
            Some(Listing { success: false, .. }) => {
                warn!(appid, "listing marked unsuccessful by storefront");
                Ok(None)
            }
            Some(Listing { data: None, .. }) => {
                warn!(appid, "successful listing carries no data payload");
                Ok(None)
            }
            Some(Listing {
                data: Some(data), ..
            }) => Ok(Some(data)),
        }
    }

    /// The locale every request is issued with.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The storefront base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
