//! Market and buylist pricing endpoints.

use serde_json::Value;

use crate::api::client::{CatalogClient, RequestTarget};
use crate::api::error::ApiError;
use crate::api::models::SkuMarketPrice;
use crate::api::operation::Operation;
use crate::api::outcome::Outcome;
use crate::auth::BearerToken;
use crate::clients::Transport;

type CallResult = Result<Outcome<Vec<Value>>, ApiError>;

impl<T: Transport> CatalogClient<T> {
    /// Returns market prices for up to 250 SKU ids.
    ///
    /// A 207 response yields [`Outcome::PartialSuccess`]; its
    /// [`unresolved`](Outcome::unresolved) ids had no price data.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidListLength`] if the list is out of bounds (nothing
    /// is sent), [`ApiError::InvalidId`] on 400,
    /// [`ApiError::InvalidBearerToken`] on 401, [`ApiError::NotFound`] on 404.
    pub async fn sku_market_prices(&self, token: &BearerToken, sku_ids: &[u32]) -> CallResult {
        self.call(
            Operation::SkuMarketPrice,
            RequestTarget::Ids(sku_ids),
            Vec::new(),
            token,
        )
        .await
    }

    /// Like [`sku_market_prices`](Self::sku_market_prices), deserialized into
    /// [`SkuMarketPrice`] records.
    ///
    /// # Errors
    ///
    /// As [`sku_market_prices`](Self::sku_market_prices), plus
    /// [`ApiError::Transport`] if a record does not match the expected shape.
    pub async fn sku_market_prices_typed(
        &self,
        token: &BearerToken,
        sku_ids: &[u32],
    ) -> Result<Outcome<Vec<SkuMarketPrice>>, ApiError> {
        self.sku_market_prices(token, sku_ids).await?.deserialize()
    }

    /// Returns market prices for up to 250 product ids.
    ///
    /// # Errors
    ///
    /// As [`sku_market_prices`](Self::sku_market_prices).
    pub async fn product_market_prices(
        &self,
        token: &BearerToken,
        product_ids: &[u32],
    ) -> CallResult {
        self.call(
            Operation::ProductMarketPrice,
            RequestTarget::Ids(product_ids),
            Vec::new(),
            token,
        )
        .await
    }

    /// Returns market prices for every product in a group.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidGroupId`] on 400, [`ApiError::InvalidBearerToken`]
    /// on 401, [`ApiError::NotFound`] on 404.
    pub async fn group_market_prices(&self, token: &BearerToken, group_id: u32) -> CallResult {
        self.call(
            Operation::GroupMarketPrice,
            RequestTarget::Id(group_id),
            Vec::new(),
            token,
        )
        .await
    }

    /// Returns buylist prices for up to 250 SKU ids.
    ///
    /// # Errors
    ///
    /// As [`sku_market_prices`](Self::sku_market_prices).
    pub async fn sku_buylist_prices(&self, token: &BearerToken, sku_ids: &[u32]) -> CallResult {
        self.call(
            Operation::SkuBuylistPrice,
            RequestTarget::Ids(sku_ids),
            Vec::new(),
            token,
        )
        .await
    }

    /// Returns buylist prices for up to 250 product ids.
    ///
    /// # Errors
    ///
    /// As [`sku_market_prices`](Self::sku_market_prices).
    pub async fn product_buylist_prices(
        &self,
        token: &BearerToken,
        product_ids: &[u32],
    ) -> CallResult {
        self.call(
            Operation::ProductBuylistPrice,
            RequestTarget::Ids(product_ids),
            Vec::new(),
            token,
        )
        .await
    }

    /// Returns buylist prices for every product in a group.
    ///
    /// # Errors
    ///
    /// As [`group_market_prices`](Self::group_market_prices).
    pub async fn group_buylist_prices(&self, token: &BearerToken, group_id: u32) -> CallResult {
        self.call(
            Operation::GroupBuylistPrice,
            RequestTarget::Id(group_id),
            Vec::new(),
            token,
        )
        .await
    }
}
