//! Integration tests for the market and buylist pricing endpoints.

use serde_json::json;
use tcgplayer_api::clients::TransportError;
use tcgplayer_api::{
    ApiError, ApiHost, BearerToken, CatalogClient, EntityScope, Operation, SkuMarketPrice,
    TcgConfig,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> TcgConfig {
    TcgConfig::builder()
        .api_host(ApiHost::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&config_for(server)).unwrap()
}

fn token() -> BearerToken {
    BearerToken::new("test-token").unwrap()
}

fn sku_price(sku_id: u32, market: f64) -> serde_json::Value {
    json!({
        "skuId": sku_id,
        "lowPrice": market - 0.1,
        "lowestShipping": 0.99,
        "lowestListingPrice": market + 0.5,
        "marketPrice": market,
        "directLowPrice": null
    })
}

#[tokio::test]
async fn test_sku_market_price_partial_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pricing/sku/101,202,99999"))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!({
            "success": true,
            "errors": ["No data found for sku 99999"],
            "results": [sku_price(101, 0.25), sku_price(202, 3.5)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = client_for(&mock_server)
        .sku_market_prices(&token(), &[101, 202, 99999])
        .await
        .unwrap();

    assert!(outcome.is_partial());
    assert_eq!(outcome.payload().len(), 2);
    assert_eq!(outcome.unresolved(), &[99999]);
}

#[tokio::test]
async fn test_sku_market_price_typed_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pricing/sku/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "results": [sku_price(101, 0.25)]
        })))
        .mount(&mock_server)
        .await;

    let outcome = client_for(&mock_server)
        .sku_market_prices_typed(&token(), &[101])
        .await
        .unwrap();

    let prices: &Vec<SkuMarketPrice> = outcome.payload();
    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0].sku_id, 101);
    assert_eq!(prices[0].market_price, Some(0.25));
    assert_eq!(prices[0].direct_low_price, None);
}

#[tokio::test]
async fn test_typed_records_with_wrong_shape_are_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pricing/sku/101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"productId": 101}]
        })))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .sku_market_prices_typed(&token(), &[101])
        .await;

    assert!(matches!(
        result,
        Err(ApiError::Transport(TransportError::MalformedBody { status: 200, .. }))
    ));
}

#[tokio::test]
async fn test_minimum_two_override_rejects_single_sku() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = TcgConfig::builder()
        .api_host(ApiHost::new(mock_server.uri()).unwrap())
        .min_batch_size(Operation::SkuMarketPrice, 2)
        .build()
        .unwrap();
    let client = CatalogClient::new(&config).unwrap();

    let result = client.sku_market_prices(&token(), &[101]).await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidListLength { size: 1, min: 2, max: 250 })
    ));
}

#[tokio::test]
async fn test_product_market_prices_full_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pricing/product/5,6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "results": [
                {"productId": 5, "marketPrice": 1.0, "subTypeName": "Normal"},
                {"productId": 6, "marketPrice": 2.0, "subTypeName": "Foil"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let outcome = client_for(&mock_server)
        .product_market_prices(&token(), &[5, 6])
        .await
        .unwrap();

    assert!(!outcome.is_partial());
    assert_eq!(outcome.payload().len(), 2);
}

#[tokio::test]
async fn test_group_market_prices_errors_are_group_scoped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pricing/group/0"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pricing/group/424242"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert!(matches!(
        client.group_market_prices(&token(), 0).await,
        Err(ApiError::InvalidGroupId)
    ));
    assert!(matches!(
        client.group_market_prices(&token(), 424_242).await,
        Err(ApiError::NotFound {
            scope: EntityScope::Group
        })
    ));
}

#[tokio::test]
async fn test_buylist_paths() {
    let mock_server = MockServer::start().await;

    for endpoint in ["/pricing/buy/sku/1,2", "/pricing/buy/product/3", "/pricing/buy/group/4"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    client.sku_buylist_prices(&token(), &[1, 2]).await.unwrap();
    client.product_buylist_prices(&token(), &[3]).await.unwrap();
    client.group_buylist_prices(&token(), 4).await.unwrap();
}

#[tokio::test]
async fn test_pricing_404_for_batch_is_pricing_scoped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .sku_buylist_prices(&token(), &[1, 2])
        .await;

    assert!(matches!(
        result,
        Err(ApiError::NotFound {
            scope: EntityScope::Pricing
        })
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

    let result = client.sku_market_prices(&token(), &[101, 202]).await;

    assert!(matches!(
        result,
        Err(ApiError::Transport(TransportError::Network(_)))
    ));
}

#[tokio::test]
async fn test_partial_success_without_results_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pricing/product/5,6"))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!({
            "success": true,
            "errors": ["No data found for product 6"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .product_market_prices(&token(), &[5, 6])
        .await;

    assert!(matches!(
        result,
        Err(ApiError::Transport(TransportError::MalformedBody { status: 207, .. }))
    ));
}
