//! Integration tests for the catalog endpoints.
//!
//! Each test mounts a mock vendor endpoint and verifies the request the
//! client sends (path, query, authorization) and how the response is
//! classified.

use serde_json::json;
use tcgplayer_api::api::{
    CategoryListQuery, GroupSearchQuery, Paging, ProductDetailsQuery, ProductListQuery,
};
use tcgplayer_api::clients::TransportError;
use tcgplayer_api::{ApiError, ApiHost, BearerToken, CatalogClient, EntityScope, TcgConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CatalogClient {
    let config = TcgConfig::builder()
        .api_host(ApiHost::new(server.uri()).unwrap())
        .build()
        .unwrap();
    CatalogClient::new(&config).unwrap()
}

fn token() -> BearerToken {
    BearerToken::new("test-token").unwrap()
}

fn results(entries: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "errors": [],
        "results": entries
    }))
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_category_groups_sends_bearer_header_and_paging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/categories/1/groups"))
        .and(header("authorization", "bearer test-token"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(results(json!([{"groupId": 1, "name": "Alpha"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = client_for(&mock_server)
        .category_groups(&token(), 1, Paging::new(0, 10))
        .await
        .unwrap();

    assert!(!outcome.is_partial());
    assert_eq!(outcome.payload(), &vec![json!({"groupId": 1, "name": "Alpha"})]);
}

#[tokio::test]
async fn test_category_list_omits_unset_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/categories"))
        .and(query_param("sortOrder", "popularity"))
        .respond_with(results(json!([{"categoryId": 1}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = CategoryListQuery {
        sort_order: Some("popularity".to_string()),
        ..CategoryListQuery::default()
    };
    client_for(&mock_server)
        .category_list(&token(), &query)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("sortOrder=popularity"));
}

#[tokio::test]
async fn test_category_media_400_is_invalid_category_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/categories/0/media"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).category_media(&token(), 0).await;

    assert!(matches!(result, Err(ApiError::InvalidCategoryId)));
}

#[tokio::test]
async fn test_category_details_batch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/categories/1,2"))
        .respond_with(results(json!([{"categoryId": 1}, {"categoryId": 2}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = client_for(&mock_server)
        .category_details(&token(), &[1, 2])
        .await
        .unwrap();

    assert_eq!(outcome.payload().len(), 2);
}

// ============================================================================
// Groups
// ============================================================================

#[tokio::test]
async fn test_group_search_requires_category_and_sends_flags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/groups"))
        .and(query_param("categoryId", "3"))
        .and(query_param("hasSealed", "true"))
        .respond_with(results(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = client_for(&mock_server)
        .group_search(&token(), &GroupSearchQuery::new(3).has_sealed(true))
        .await
        .unwrap();

    assert!(outcome.payload().is_empty());
}

#[tokio::test]
async fn test_group_details_empty_list_never_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(results(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).group_details(&token(), &[]).await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidListLength { size: 0, .. })
    ));
}

#[tokio::test]
async fn test_group_details_207_names_unresolved_groups() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/groups/3,4,12"))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!({
            "success": true,
            "errors": ["Group 12 was not found"],
            "results": [{"groupId": 3}, {"groupId": 4}]
        })))
        .mount(&mock_server)
        .await;

    let outcome = client_for(&mock_server)
        .group_details(&token(), &[3, 4, 12])
        .await
        .unwrap();

    assert!(outcome.is_partial());
    assert_eq!(outcome.unresolved(), &[12]);
    assert_eq!(outcome.errors(), &["Group 12 was not found".to_string()]);
}

#[tokio::test]
async fn test_group_media_400_and_404_are_distinct() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/groups/0/media"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog/groups/999999/media"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert!(matches!(
        client.group_media(&token(), 0).await,
        Err(ApiError::InvalidGroupId)
    ));
    assert!(matches!(
        client.group_media(&token(), 999_999).await,
        Err(ApiError::NotFound {
            scope: EntityScope::Group
        })
    ));
}

// ============================================================================
// Products and SKUs
// ============================================================================

#[tokio::test]
async fn test_product_list_sends_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/products"))
        .and(query_param("groupId", "2"))
        .and(query_param("productTypes", "Cards,Sealed Products"))
        .and(query_param("includeSkus", "true"))
        .respond_with(results(json!([{"productId": 5}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = ProductListQuery {
        group_id: Some(2),
        product_types: vec!["Cards".to_string(), "Sealed Products".to_string()],
        include_skus: Some(true),
        ..ProductListQuery::default()
    };
    let outcome = client_for(&mock_server)
        .product_list(&token(), &query)
        .await
        .unwrap();

    assert_eq!(outcome.payload().len(), 1);
}

#[tokio::test]
async fn test_product_details_404_is_product_scoped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/products/7,8"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .product_details(&token(), &[7, 8], &ProductDetailsQuery::default())
        .await;

    let error = result.unwrap_err();
    assert!(matches!(
        error,
        ApiError::NotFound {
            scope: EntityScope::Product
        }
    ));
    assert!(error.to_string().contains("product ids"));
}

#[tokio::test]
async fn test_product_skus_and_media_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/products/5/skus"))
        .respond_with(results(json!([{"skuId": 50}])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog/products/5/media"))
        .respond_with(results(json!([{"contentList": []}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let skus = client.product_skus(&token(), 5).await.unwrap();
    let media = client.product_media(&token(), 5).await.unwrap();

    assert_eq!(skus.payload()[0]["skuId"], 50);
    assert_eq!(media.payload().len(), 1);
}

#[tokio::test]
async fn test_related_products_with_paging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/products/5/productsalsopurchased"))
        .and(query_param("limit", "100"))
        .respond_with(results(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let paging = Paging {
        offset: None,
        limit: Some(100),
    };
    client_for(&mock_server)
        .related_products(&token(), 5, paging)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sku_details_over_250_never_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(results(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ids: Vec<u32> = (1..=251).collect();
    let result = client_for(&mock_server).sku_details(&token(), &ids).await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidListLength { size: 251, .. })
    ));
}

#[tokio::test]
async fn test_expired_token_is_invalid_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert!(matches!(
        client.sku_details(&token(), &[1]).await,
        Err(ApiError::InvalidBearerToken)
    ));
    assert!(matches!(
        client.category_media(&token(), 1).await,
        Err(ApiError::InvalidBearerToken)
    ));
}

#[tokio::test]
async fn test_unexpected_status_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).group_media(&token(), 3).await;

    assert!(matches!(
        result,
        Err(ApiError::UnexpectedStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_failure() {
    // Nothing listens on port 9 (discard) on the loopback interface
    let config = TcgConfig::builder()
        .api_host(ApiHost::new("http://127.0.0.1:9").unwrap())
        .build()
        .unwrap();
    let client = CatalogClient::new(&config).unwrap();

    let result = client.group_media(&token(), 3).await;

    assert!(matches!(
        result,
        Err(ApiError::Transport(TransportError::Network(_)))
    ));
}

#[tokio::test]
async fn test_group_details_207_with_non_array_results_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/groups/3,4"))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!({
            "errors": ["Group 4 was not found"],
            "results": {"groupId": 3}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).group_details(&token(), &[3, 4]).await;

    assert!(matches!(
        result,
        Err(ApiError::Transport(TransportError::MalformedBody { status: 207, .. }))
    ));
}

#[tokio::test]
async fn test_product_list_400_is_invalid_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/products"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let query = ProductListQuery {
        product_name: Some("Black Lotus".to_string()),
        ..ProductListQuery::default()
    };
    let result = client_for(&mock_server).product_list(&token(), &query).await;

    assert!(matches!(result, Err(ApiError::InvalidId)));
}
