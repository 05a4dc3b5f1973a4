use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::dlc::DlcSummary;
use crate::models::package::{PackageGroup, SubOffer};
use crate::models::price::PriceOverview;

// ---------------------------------------------------------------------------
// Listing — one entry of an appdetails response
// ---------------------------------------------------------------------------

/// One entry of an `appdetails` response, keyed by the stringified app id.
///
/// `data` is only populated when `success` is true, and even then the
/// storefront occasionally omits it; both conditions are treated as an
/// unresolvable listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppData>,
}

// ---------------------------------------------------------------------------
// AppData — raw listing payload
// ---------------------------------------------------------------------------

/// The listing payload for a single app, as returned by the storefront.
///
/// Fields are passed through verbatim with no coercion. `required_age` is
/// kept as a raw JSON value because the storefront sends it as either a
/// number or a string depending on the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(rename = "type", default)]
    pub app_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub steam_appid: Option<u64>,
    #[serde(default)]
    pub required_age: Value,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub controller_support: Option<String>,
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(default)]
    pub dlc: Vec<u64>,
    #[serde(default)]
    pub price_overview: Option<PriceOverview>,
    #[serde(default)]
    pub package_groups: Vec<PackageGroup>,
}

// ---------------------------------------------------------------------------
// AppReport — aggregated summary of an app and its add-on content
// ---------------------------------------------------------------------------

/// Aggregated summary of one app: its core listing fields, the resolved DLC
/// summaries with their price total, and any flattened sub-offers.
///
/// `dlc_total_price` is the sum of `final_price` over every resolved DLC
/// that carries a price, in minor-currency units; a DLC without pricing
/// contributes zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppReport {
    pub app_type: Option<String>,
    pub name: Option<String>,
    pub steam_appid: Option<u64>,
    pub required_age: Value,
    pub is_free: bool,
    pub controller_support: Option<String>,
    pub header_image: Option<String>,
    pub dlc: Vec<DlcSummary>,
    pub dlc_total_price: u64,
    pub price_overview: Option<PriceOverview>,
    pub subs: Vec<SubOffer>,
}
