//! Typed records for pricing results.

use serde::{Deserialize, Serialize};

/// Market price data for one SKU, as returned by the SKU market price endpoint.
///
/// Every price is optional: the vendor sends `null` when no listing backs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuMarketPrice {
    /// The SKU the prices belong to.
    pub sku_id: u32,
    /// Lowest listed price, excluding shipping.
    pub low_price: Option<f64>,
    /// Lowest shipping cost among listings.
    pub lowest_shipping: Option<f64>,
    /// Lowest listing price including shipping.
    pub lowest_listing_price: Option<f64>,
    /// Market price from recent sales.
    pub market_price: Option<f64>,
    /// Lowest price among direct-eligible listings.
    pub direct_low_price: Option<f64>,
}
