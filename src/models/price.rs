use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceOverview — price block attached to a listing
// ---------------------------------------------------------------------------

/// Pricing for a single listing, taken verbatim from the storefront.
///
/// Amounts are integer minor-currency units (cents); the `*_formatted`
/// strings are the storefront's own locale-formatted renderings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOverview {
    pub currency: String,
    #[serde(default)]
    pub initial: u64,
    #[serde(rename = "final", default)]
    pub final_price: u64,
    #[serde(default)]
    pub discount_percent: u32,
    #[serde(default)]
    pub initial_formatted: String,
    #[serde(default)]
    pub final_formatted: String,
}
