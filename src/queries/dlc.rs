//! DLC resolution: turn a list of DLC app ids into compact summaries.

use futures_util::{stream, StreamExt};
use tracing::{debug, warn};

use crate::client::StoreClient;
use crate::models::{DlcSummary, UNKNOWN_NAME};

// ---------------------------------------------------------------------------
// DlcQuery
// ---------------------------------------------------------------------------

/// Query interface resolving DLC app ids to [`DlcSummary`] values.
pub struct DlcQuery<'a> {
    client: &'a StoreClient,
    max_concurrency: usize,
}

impl<'a> DlcQuery<'a> {
    /// Create a `DlcQuery` bound to the given client.
    ///
    /// `max_concurrency` caps how many listing fetches are in flight at
    /// once; it is clamped to at least 1.
    pub fn new(client: &'a StoreClient, max_concurrency: usize) -> Self {
        Self {
            client,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Resolve each id to a summary, keeping only the ids whose listing
    /// fetch succeeded.
    ///
    /// An empty input returns immediately without any network activity.
    /// Fetches run through a bounded fan-out that preserves input order.
    /// Listings that are missing, marked unsuccessful, or fail to fetch are
    /// skipped individually — one bad id never affects its siblings.
    pub async fn resolve(&self, ids: &[u64]) -> Vec<DlcSummary> {
        if ids.is_empty() {
            return Vec::new();
        }

        stream::iter(ids.iter().copied())
            .map(|appid| self.resolve_one(appid))
            .buffered(self.max_concurrency)
            .filter_map(|summary| async move { summary })
            .collect()
            .await
    }

    /// Fetch one DLC listing, reducing it to a summary or a skip.
    async fn resolve_one(&self, appid: u64) -> Option<DlcSummary> {
        match self.client.app_details(appid).await {
            Ok(Some(data)) => Some(DlcSummary {
                appid,
                name: data.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                header_image: data.header_image,
                price_overview: data.price_overview,
            }),
            Ok(None) => {
                // Already logged by the client; soft-skip.
                debug!(appid, "dlc listing not resolvable; skipping");
                None
            }
            Err(err) => {
                warn!(appid, error = %err, "dlc listing fetch failed; skipping");
                None
            }
        }
    }
}
