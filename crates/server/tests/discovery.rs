//! Discovery reshaping and health reporting against a mocked backend.

use minutemart_server::api::ApiClient;
use minutemart_server::config::Config;
use minutemart_server::mcp::types::ToolContent;
use minutemart_server::tools::ToolExecutor;
use serde_json::{Value, json};

fn client_for(server: &mockito::Server) -> ApiClient {
    let config = Config {
        api_base_url: server.url(),
        request_timeout_secs: 5,
    };
    ApiClient::new(&config).expect("client")
}

fn text_payload(content: &[ToolContent]) -> Value {
    let text = content
        .iter()
        .find_map(|c| match c {
            ToolContent::Text { text } => Some(text.clone()),
            ToolContent::Image { .. } => None,
        })
        .expect("text content");
    serde_json::from_str(&text).expect("json payload")
}

#[tokio::test]
async fn search_injects_formatted_products() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/products/search")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("q".into(), "milk".into()),
            mockito::Matcher::UrlEncoded("page".into(), "1".into()),
            mockito::Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_body(
            json!({"success": true, "data": {"products": [
                {"_id": "p1", "name": "Toned Milk", "price": 27.0, "mrp": 30.0,
                 "unit": "500 ml", "stock": 20, "rating": 4.2, "reviewCount": 90},
                {"_id": "p2", "name": "Full Cream Milk", "price": 33.0, "mrp": 33.0,
                 "unit": "500 ml", "stock": 0}
            ]}})
            .to_string(),
        )
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute(
            "search_products",
            &json!({"query": "milk", "show_images": false}),
        )
        .await
        .expect("search");

    // No images requested, so exactly one text content item.
    assert_eq!(content.len(), 1);

    let payload = text_payload(&content);
    let formatted = payload["data"]["formatted_products"]
        .as_array()
        .expect("formatted_products");
    assert_eq!(formatted.len(), 2);
    assert_eq!(formatted[0]["discount_percent"], 10);
    assert_eq!(formatted[0]["in_stock"], true);
    assert_eq!(formatted[1]["discount_percent"], 0);
    assert_eq!(formatted[1]["in_stock"], false);

    // The raw product list is still present alongside the summaries.
    assert_eq!(payload["data"]["products"].as_array().expect("raw").len(), 2);
}

#[tokio::test]
async fn failed_search_envelope_passes_through_unreshaped() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/products/search")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body(json!({"success": false, "message": "Search unavailable"}).to_string())
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute("search_products", &json!({"query": "milk"}))
        .await
        .expect("envelope");

    let payload = text_payload(&content);
    assert_eq!(payload["success"], false);
    assert_eq!(payload["message"], "Search unavailable");
    assert!(payload.get("data").is_none());
}

#[tokio::test]
async fn non_object_data_passes_through_without_reshaping() {
    // An upstream that answers a success envelope with string data (e.g.
    // a maintenance notice) must come back verbatim, not crash the call.
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/products/search")
        .match_query(mockito::Matcher::Any)
        .with_body(json!({"success": true, "data": "maintenance"}).to_string())
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute("search_products", &json!({"query": "milk"}))
        .await
        .expect("envelope");

    let payload = text_payload(&content);
    assert_eq!(payload["success"], true);
    assert_eq!(payload["data"], "maintenance");
}

#[tokio::test]
async fn repeated_search_yields_identical_output() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/products/search")
        .match_query(mockito::Matcher::Any)
        .expect(2)
        .with_body(
            json!({"success": true, "data": {"products": [
                {"_id": "p1", "name": "Toned Milk", "price": 27.0, "mrp": 30.0, "stock": 20}
            ]}})
            .to_string(),
        )
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let input = json!({"query": "milk", "show_images": false});

    let first = executor
        .execute("search_products", &input)
        .await
        .expect("first call");
    let second = executor
        .execute("search_products", &input)
        .await
        .expect("second call");

    let text_of = |content: &[ToolContent]| match content {
        [ToolContent::Text { text }] => text.clone(),
        other => panic!("expected exactly one text content, got {other:?}"),
    };
    assert_eq!(text_of(&first), text_of(&second));
}

#[tokio::test]
async fn malformed_row_drops_only_itself() {
    let mut server = mockito::Server::new_async().await;

    // The second row carries an unknown dietary value and cannot be
    // deserialized; the first must still be summarized.
    server
        .mock("GET", "/products/search")
        .match_query(mockito::Matcher::Any)
        .with_body(
            json!({"success": true, "data": {"products": [
                {"_id": "p1", "name": "Toned Milk", "price": 27.0, "mrp": 30.0, "stock": 20},
                {"_id": "p2", "name": "Mystery", "dietaryPreference": "unclassified"}
            ]}})
            .to_string(),
        )
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute(
            "search_products",
            &json!({"query": "milk", "show_images": false}),
        )
        .await
        .expect("search");

    let payload = text_payload(&content);
    let formatted = payload["data"]["formatted_products"]
        .as_array()
        .expect("formatted_products");
    assert_eq!(formatted.len(), 1);
    assert_eq!(formatted[0]["name"], "Toned Milk");
    // The raw rows are untouched.
    assert_eq!(payload["data"]["products"].as_array().expect("raw").len(), 2);
}

#[tokio::test]
async fn show_product_image_reports_missing_product() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/products/nope")
        .with_status(404)
        .with_body(json!({"success": false, "message": "Product not found"}).to_string())
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute("show_product_image", &json!({"product_id": "nope"}))
        .await
        .expect("result");

    let payload = text_payload(&content);
    assert_eq!(payload["error"], "Product not found");
}

#[tokio::test]
async fn health_check_converts_connect_failure() {
    // A port with nothing listening: the request fails at the transport
    // level and the tool converts it into an explicit failure envelope.
    let config = Config {
        api_base_url: "http://127.0.0.1:1/api".to_string(),
        request_timeout_secs: 1,
    };
    let api = ApiClient::new(&config).expect("client");
    let executor = ToolExecutor::new(&api);

    let content = executor
        .execute("check_api_health", &json!({}))
        .await
        .expect("failure envelope");

    let payload = text_payload(&content);
    assert_eq!(payload["success"], false);
    assert!(
        payload["message"]
            .as_str()
            .expect("message")
            .contains("Cannot connect")
    );
}

#[tokio::test]
async fn health_check_passes_through_healthy_envelope() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/health")
        .with_body(json!({"success": true, "message": "OK"}).to_string())
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute("check_api_health", &json!({}))
        .await
        .expect("envelope");

    let payload = text_payload(&content);
    assert_eq!(payload["success"], true);
}
