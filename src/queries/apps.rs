//! App aggregation: fetch one listing and roll up its DLC and sub-offers.

use tracing::warn;

use crate::client::StoreClient;
use crate::models::{AppData, AppReport, SubOffer};
use crate::queries::dlc::DlcQuery;

// ---------------------------------------------------------------------------
// AppQuery
// ---------------------------------------------------------------------------

/// Query interface aggregating a single app listing into an [`AppReport`].
pub struct AppQuery<'a> {
    client: &'a StoreClient,
    max_concurrency: usize,
    include_sub_offers: bool,
}

impl<'a> AppQuery<'a> {
    /// Create an `AppQuery` bound to the given client.
    pub fn new(client: &'a StoreClient, max_concurrency: usize, include_sub_offers: bool) -> Self {
        Self {
            client,
            max_concurrency,
            include_sub_offers,
        }
    }

    /// Aggregate the listing for `appid` into a report.
    ///
    /// Returns `None` when the listing is missing, marked unsuccessful, or
    /// the fetch fails; the cause is logged, never raised. The declared DLC
    /// ids are resolved via [`DlcQuery`] and their final prices summed into
    /// `dlc_total_price` (a DLC without pricing contributes zero).
    ///
    /// Sub-offers are flattened from every package group, in encounter
    /// order, when the query was built with `include_sub_offers`.
    pub async fn aggregate(&self, appid: u64) -> Option<AppReport> {
        let data = match self.client.app_details(appid).await {
            Ok(Some(data)) => data,
            Ok(None) => return None,
            Err(err) => {
                warn!(appid, error = %err, "app listing fetch failed");
                return None;
            }
        };

        Some(self.build_report(data).await)
    }

    async fn build_report(&self, data: AppData) -> AppReport {
        let dlc = DlcQuery::new(self.client, self.max_concurrency)
            .resolve(&data.dlc)
            .await;

        let dlc_total_price = dlc
            .iter()
            .filter_map(|d| d.price_overview.as_ref())
            .map(|p| p.final_price)
            .sum();

        let subs: Vec<SubOffer> = if self.include_sub_offers {
            data.package_groups
                .into_iter()
                .flat_map(|group| group.subs)
                .collect()
        } else {
            Vec::new()
        };

        AppReport {
            app_type: data.app_type,
            name: data.name,
            steam_appid: data.steam_appid,
            required_age: data.required_age,
            is_free: data.is_free,
            controller_support: data.controller_support,
            header_image: data.header_image,
            dlc,
            dlc_total_price,
            price_overview: data.price_overview,
            subs,
        }
    }
}
