//! Integration tests for the public client API against a mock server.

use product_search::rapidapi::{ApiResponse, ProductSearch, ProductSearchClient, QueryParams};
use product_search::{ConfigError, Settings};
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn make_client(server: &MockServer) -> ProductSearchClient {
    let map = HashMap::from([
        ("rapid_api_key".to_string(), "integration-key".to_string()),
        ("base_url".to_string(), server.uri()),
    ]);
    ProductSearchClient::from_map(&map).unwrap()
}

#[tokio::test]
async fn test_every_operation_hits_its_path() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = make_client(&server).await;
    let none = QueryParams::new();

    assert!(client.search_products("phone", &none).await.is_success());
    assert!(client.get_product_details("abc123").await.is_success());
    assert!(client.get_product_offers("abc123", &none).await.is_success());
    assert!(client.get_product_reviews("abc123", &none).await.is_success());
    assert!(client.get_deals(&none).await.is_success());
    assert!(client.get_store_reviews("store1", &none).await.is_success());

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();

    assert_eq!(
        paths,
        vec![
            "/search",
            "/product/abc123",
            "/offers/abc123",
            "/reviews/abc123",
            "/deals",
            "/store-reviews/store1",
        ]
    );
}

#[tokio::test]
async fn test_headers_sent_on_every_request() {
    let server = MockServer::start().await;
    let expected_host = server.uri().trim_start_matches("http://").to_string();

    Mock::given(method("GET"))
        .and(header("x-rapidapi-key", "integration-key"))
        .and(header("x-rapidapi-host", expected_host.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let client = make_client(&server).await;

    assert!(client.get_deals(&QueryParams::new()).await.is_success());
    assert!(client.get_product_details("x1").await.is_success());
}

#[tokio::test]
async fn test_success_body_returned_unmodified() {
    let server = MockServer::start().await;
    let body = json!({
        "count": 3,
        "items": [
            {"title": "A", "price": 9.99, "tags": ["x"]},
            {"title": "B", "price": null},
            {"title": "C", "nested": {"deep": [1, 2, 3]}}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = make_client(&server).await;
    let response = client.search_products("anything", &QueryParams::new().with("limit", 3)).await;

    assert_eq!(response, ApiResponse::Success(body));
}

#[tokio::test]
async fn test_failures_become_error_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/offers/bad"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "forbidden"})))
        .mount(&server)
        .await;

    let client = make_client(&server).await;
    let response = client.get_product_offers("bad", &QueryParams::new()).await;

    let value = serde_json::to_value(&response).unwrap();
    let message = value["error"].as_str().unwrap();
    assert!(message.contains("403"));
    assert_eq!(value.as_object().unwrap().len(), 1);
}

#[test]
fn test_construction_without_key_fails() {
    let map = HashMap::from([("base_url".to_string(), "https://example.com".to_string())]);
    assert!(matches!(ProductSearchClient::from_map(&map), Err(ConfigError::MissingApiKey)));

    let settings = Settings::with_api_key("");
    assert!(matches!(ProductSearchClient::new(&settings), Err(ConfigError::MissingApiKey)));
}
