use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PackageGroup — purchase-option group on a listing
// ---------------------------------------------------------------------------

/// One group of purchase options on a listing. Only the nested `subs`
/// entries are of interest; the group's own metadata is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PackageGroup {
    #[serde(default)]
    pub subs: Vec<SubOffer>,
}

// ---------------------------------------------------------------------------
// SubOffer — alternate purchasable package/edition
// ---------------------------------------------------------------------------

/// An alternate edition or bundle offered alongside the base listing.
///
/// `option_text` may contain inline HTML markup and must be stripped before
/// display (see [`crate::report::strip_markup`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubOffer {
    #[serde(default)]
    pub packageid: u64,
    #[serde(default)]
    pub option_text: String,
    #[serde(default)]
    pub price_in_cents_with_discount: u64,
    #[serde(default)]
    pub percent_savings_text: String,
    #[serde(default)]
    pub is_free_license: bool,
}
