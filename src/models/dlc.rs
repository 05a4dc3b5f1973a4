use serde::{Deserialize, Serialize};

use crate::models::price::PriceOverview;

/// Display name used when a DLC listing carries no name of its own.
pub const UNKNOWN_NAME: &str = "Unknown";

// ---------------------------------------------------------------------------
// DlcSummary — compact view of one resolved DLC listing
// ---------------------------------------------------------------------------

/// Compact summary of a successfully resolved DLC listing.
///
/// Built once per successful fetch; listings that are missing or marked
/// unsuccessful produce no summary at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DlcSummary {
    pub appid: u64,
    pub name: String,
    pub header_image: Option<String>,
    pub price_overview: Option<PriceOverview>,
}
