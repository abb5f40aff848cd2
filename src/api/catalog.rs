//! Catalog endpoints: categories, groups, products and SKUs.
//!
//! Every method returns the generic `results` payload as
//! `Vec<serde_json::Value>`; use [`Outcome::deserialize`] for typed records.
//!
//! | Method | Path | Ids |
//! |---|---|---|
//! | [`category_list`](CatalogClient::category_list) | `catalog/categories` | - |
//! | [`category_details`](CatalogClient::category_details) | `catalog/categories/{ids}` | 1-250 |
//! | [`category_groups`](CatalogClient::category_groups) | `catalog/categories/{id}/groups` | 1 |
//! | [`category_media`](CatalogClient::category_media) | `catalog/categories/{id}/media` | 1 |
//! | [`group_search`](CatalogClient::group_search) | `catalog/groups` | - |
//! | [`group_details`](CatalogClient::group_details) | `catalog/groups/{ids}` | 1-250 |
//! | [`group_media`](CatalogClient::group_media) | `catalog/groups/{id}/media` | 1 |
//! | [`product_list`](CatalogClient::product_list) | `catalog/products` | - |
//! | [`product_details`](CatalogClient::product_details) | `catalog/products/{ids}` | 1-250 |
//! | [`product_skus`](CatalogClient::product_skus) | `catalog/products/{id}/skus` | 1 |
//! | [`related_products`](CatalogClient::related_products) | `catalog/products/{id}/productsalsopurchased` | 1 |
//! | [`product_media`](CatalogClient::product_media) | `catalog/products/{id}/media` | 1 |
//! | [`sku_details`](CatalogClient::sku_details) | `catalog/skus/{ids}` | 1-250 |

use serde_json::Value;

use crate::api::client::{CatalogClient, RequestTarget};
use crate::api::error::ApiError;
use crate::api::operation::Operation;
use crate::api::outcome::Outcome;
use crate::api::params::{
    CategoryListQuery, GroupSearchQuery, Paging, ProductDetailsQuery, ProductListQuery,
};
use crate::auth::BearerToken;
use crate::clients::Transport;

type CallResult = Result<Outcome<Vec<Value>>, ApiError>;

impl<T: Transport> CatalogClient<T> {
    /// Lists every category.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidBearerToken`] on 401,
    /// [`ApiError::NotFound`] on 404.
    pub async fn category_list(&self, token: &BearerToken, query: &CategoryListQuery) -> CallResult {
        self.call(
            Operation::CategoryList,
            RequestTarget::Collection,
            query.to_pairs(),
            token,
        )
        .await
    }

    /// Looks up category details for up to 250 category ids.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidListLength`] if the list is out of bounds (nothing
    /// is sent), otherwise the batch classification.
    pub async fn category_details(&self, token: &BearerToken, category_ids: &[u32]) -> CallResult {
        self.call(
            Operation::CategoryDetails,
            RequestTarget::Ids(category_ids),
            Vec::new(),
            token,
        )
        .await
    }

    /// Lists the groups (sets) belonging to a category.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidCategoryId`] on 400, [`ApiError::InvalidBearerToken`]
    /// on 401, [`ApiError::NotFound`] on 404.
    pub async fn category_groups(
        &self,
        token: &BearerToken,
        category_id: u32,
        paging: Paging,
    ) -> CallResult {
        self.call(
            Operation::CategoryGroups,
            RequestTarget::Id(category_id),
            paging.to_pairs(),
            token,
        )
        .await
    }

    /// Returns category-wide media such as card backs.
    ///
    /// # Errors
    ///
    /// As [`category_groups`](Self::category_groups).
    pub async fn category_media(&self, token: &BearerToken, category_id: u32) -> CallResult {
        self.call(
            Operation::CategoryMedia,
            RequestTarget::Id(category_id),
            Vec::new(),
            token,
        )
        .await
    }

    /// Searches groups within a category.
    ///
    /// # Errors
    ///
    /// As [`category_groups`](Self::category_groups).
    pub async fn group_search(&self, token: &BearerToken, query: &GroupSearchQuery) -> CallResult {
        self.call(
            Operation::GroupSearch,
            RequestTarget::Collection,
            query.to_pairs(),
            token,
        )
        .await
    }

    /// Looks up group details for up to 250 group ids.
    ///
    /// A 207 response yields [`Outcome::PartialSuccess`] naming the ids that
    /// were not found.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidListLength`] if the list is out of bounds (nothing
    /// is sent), [`ApiError::InvalidId`] on 400,
    /// [`ApiError::InvalidBearerToken`] on 401, [`ApiError::NotFound`] on 404.
    pub async fn group_details(&self, token: &BearerToken, group_ids: &[u32]) -> CallResult {
        self.call(
            Operation::GroupDetails,
            RequestTarget::Ids(group_ids),
            Vec::new(),
            token,
        )
        .await
    }

    /// Returns media for one group.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidGroupId`] on 400, [`ApiError::InvalidBearerToken`]
    /// on 401, [`ApiError::NotFound`] on 404.
    pub async fn group_media(&self, token: &BearerToken, group_id: u32) -> CallResult {
        self.call(
            Operation::GroupMedia,
            RequestTarget::Id(group_id),
            Vec::new(),
            token,
        )
        .await
    }

    /// Lists or searches products.
    ///
    /// # Errors
    ///
    /// As [`product_skus`](Self::product_skus).
    pub async fn product_list(&self, token: &BearerToken, query: &ProductListQuery) -> CallResult {
        self.call(
            Operation::ProductList,
            RequestTarget::Collection,
            query.to_pairs(),
            token,
        )
        .await
    }

    /// Looks up product details for up to 250 product ids.
    ///
    /// # Errors
    ///
    /// As [`group_details`](Self::group_details).
    pub async fn product_details(
        &self,
        token: &BearerToken,
        product_ids: &[u32],
        query: &ProductDetailsQuery,
    ) -> CallResult {
        self.call(
            Operation::ProductDetails,
            RequestTarget::Ids(product_ids),
            query.to_pairs(),
            token,
        )
        .await
    }

    /// Lists every SKU of one product.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidId`] on 400, [`ApiError::InvalidBearerToken`] on
    /// 401, [`ApiError::NotFound`] on 404.
    pub async fn product_skus(&self, token: &BearerToken, product_id: u32) -> CallResult {
        self.call(
            Operation::ProductSkus,
            RequestTarget::Id(product_id),
            Vec::new(),
            token,
        )
        .await
    }

    /// Lists products frequently bought together with one product.
    ///
    /// The vendor allows a `limit` of up to 100.
    ///
    /// # Errors
    ///
    /// As [`product_skus`](Self::product_skus).
    pub async fn related_products(
        &self,
        token: &BearerToken,
        product_id: u32,
        paging: Paging,
    ) -> CallResult {
        self.call(
            Operation::RelatedProducts,
            RequestTarget::Id(product_id),
            paging.to_pairs(),
            token,
        )
        .await
    }

    /// Returns media for one product.
    ///
    /// # Errors
    ///
    /// As [`product_skus`](Self::product_skus).
    pub async fn product_media(&self, token: &BearerToken, product_id: u32) -> CallResult {
        self.call(
            Operation::ProductMedia,
            RequestTarget::Id(product_id),
            Vec::new(),
            token,
        )
        .await
    }

    /// Looks up SKU details for up to 250 SKU ids.
    ///
    /// # Errors
    ///
    /// As [`group_details`](Self::group_details).
    pub async fn sku_details(&self, token: &BearerToken, sku_ids: &[u32]) -> CallResult {
        self.call(
            Operation::SkuDetails,
            RequestTarget::Ids(sku_ids),
            Vec::new(),
            token,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::config::TcgConfig;

    fn token() -> BearerToken {
        BearerToken::new("tok").unwrap()
    }

    #[tokio::test]
    async fn test_group_details_empty_list_sends_nothing() {
        let transport = RecordingTransport::ok(r#"{"results": []}"#);
        let client = CatalogClient::with_transport(&transport, TcgConfig::default());

        let result = client.group_details(&token(), &[]).await;

        assert!(matches!(
            result,
            Err(ApiError::InvalidListLength { size: 0, .. })
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_group_search_sends_category_query() {
        let transport = RecordingTransport::ok(r#"{"results": [{"groupId": 1}]}"#);
        let client = CatalogClient::with_transport(&transport, TcgConfig::default());

        let outcome = client
            .group_search(&token(), &GroupSearchQuery::new(1).limit(5))
            .await
            .unwrap();

        assert_eq!(outcome.payload().len(), 1);
        let sent = transport.single_request();
        assert_eq!(sent.path, "catalog/groups");
        assert_eq!(
            sent.query,
            vec![
                ("categoryId".to_string(), "1".to_string()),
                ("limit".to_string(), "5".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_group_media_400_is_invalid_group_id() {
        let transport = RecordingTransport::with_status(400, "");
        let client = CatalogClient::with_transport(&transport, TcgConfig::default());

        let result = client.group_media(&token(), 0).await;

        assert!(matches!(result, Err(ApiError::InvalidGroupId)));
    }

    #[tokio::test]
    async fn test_product_details_passes_flags() {
        let transport = RecordingTransport::ok(r#"{"results": [{"productId": 9}]}"#);
        let client = CatalogClient::with_transport(&transport, TcgConfig::default());
        let query = ProductDetailsQuery {
            get_extended_fields: Some(true),
            include_skus: None,
        };

        client.product_details(&token(), &[9], &query).await.unwrap();

        let sent = transport.single_request();
        assert_eq!(sent.path, "catalog/products/9");
        assert_eq!(
            sent.query,
            vec![("getExtendedFields".to_string(), "true".to_string())]
        );
    }

    #[tokio::test]
    async fn test_related_products_path() {
        let transport = RecordingTransport::ok(r#"{"results": []}"#);
        let client = CatalogClient::with_transport(&transport, TcgConfig::default());

        client
            .related_products(&token(), 42, Paging::default())
            .await
            .unwrap();

        let sent = transport.single_request();
        assert_eq!(sent.path, "catalog/products/42/productsalsopurchased");
        assert!(sent.query.is_empty());
    }
}
