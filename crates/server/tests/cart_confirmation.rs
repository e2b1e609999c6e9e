//! The two-phase add-to-cart gate: an unconfirmed call must not mutate the
//! remote cart, a confirmed call issues exactly one mutation and then runs
//! the co-purchase recommendation pass.

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

fn product_detail_body() -> String {
    json!({
        "success": true,
        "data": {"product": {
            "_id": "p1",
            "name": "Amul Butter",
            "price": 54.0,
            "mrp": 60.0,
            "unit": "100 g",
            "rating": 4.5,
            "reviewCount": 230,
            "stock": 12
        }}
    })
    .to_string()
}

#[tokio::test]
async fn unconfirmed_add_proposes_without_mutating() {
    let mut server = mockito::Server::new_async().await;

    let detail = server
        .mock("GET", "/products/p1")
        .with_body(product_detail_body())
        .create_async()
        .await;

    let add = server
        .mock("POST", "/cart/items")
        .expect(0)
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute(
            "add_to_cart",
            &json!({"product_id": "p1", "quantity": 2}),
        )
        .await
        .expect("proposal");

    let payload = text_payload(&content);
    assert_eq!(payload["awaiting_confirmation"], true);
    assert_eq!(payload["product_id"], "p1");
    let message = payload["message"].as_str().expect("message");
    assert!(message.contains("Amul Butter"));
    assert!(message.contains("10% off"));
    assert!(message.contains("Say 'Yes' to confirm"));

    detail.assert_async().await;
    add.assert_async().await;
}

#[tokio::test]
async fn confirmed_add_mutates_once_without_recommendation() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/products/p1")
        .with_body(product_detail_body())
        .create_async()
        .await;

    let add = server
        .mock("POST", "/cart/items")
        .match_body(mockito::Matcher::Json(
            json!({"productId": "p1", "quantity": 2}),
        ))
        .expect(1)
        .with_body(json!({"success": true, "message": "Added to cart"}).to_string())
        .create_async()
        .await;

    // No purchase history: the recommendation pass yields nothing.
    server
        .mock("GET", "/orders")
        .match_query(mockito::Matcher::Any)
        .with_body(json!({"success": true, "data": {"orders": []}}).to_string())
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute(
            "add_to_cart",
            &json!({"product_id": "p1", "quantity": 2, "confirmed": true}),
        )
        .await
        .expect("result");

    let payload = text_payload(&content);
    assert_eq!(payload["success"], true);
    assert_eq!(payload["has_recommendation"], false);
    assert!(payload.get("recommendation").is_none());

    add.assert_async().await;
}

#[tokio::test]
async fn confirmed_add_attaches_co_purchase_recommendation() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/products/p1")
        .with_body(product_detail_body())
        .create_async()
        .await;

    server
        .mock("POST", "/cart/items")
        .expect(1)
        .with_body(json!({"success": true, "message": "Added to cart"}).to_string())
        .create_async()
        .await;

    // Two of three past orders pair p1 with p9 (bread).
    let orders = json!({"success": true, "data": {"orders": [
        {"_id": "o1", "items": [
            {"productId": "p1", "name": "Amul Butter"},
            {"productId": "p9", "name": "Brown Bread", "price": 40.0, "unit": "400 g"}
        ]},
        {"_id": "o2", "items": [
            {"productId": "p1", "name": "Amul Butter"},
            {"productId": "p9", "name": "Brown Bread", "price": 40.0, "unit": "400 g"}
        ]},
        {"_id": "o3", "items": [{"productId": "p2", "name": "Milk"}]}
    ]}});
    server
        .mock("GET", "/orders")
        .match_query(mockito::Matcher::Any)
        .with_body(orders.to_string())
        .create_async()
        .await;

    // Fresh detail for the recommended product.
    server
        .mock("GET", "/products/p9")
        .with_body(
            json!({"success": true, "data": {"product": {
                "_id": "p9",
                "name": "Brown Bread",
                "price": 42.0,
                "mrp": 45.0,
                "unit": "400 g",
                "stock": 8
            }}})
            .to_string(),
        )
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute(
            "add_to_cart",
            &json!({"product_id": "p1", "confirmed": true}),
        )
        .await
        .expect("result");

    let payload = text_payload(&content);
    assert_eq!(payload["has_recommendation"], true);
    let recommendation = &payload["recommendation"];
    assert_eq!(recommendation["type"], "frequently_bought_together");
    assert_eq!(recommendation["times_bought_together"], 2);
    assert_eq!(recommendation["product"]["name"], "Brown Bread");
    // Refreshed price, not the historical snapshot.
    assert_eq!(recommendation["product"]["price"], 42.0);
    assert!(
        recommendation["message"]
            .as_str()
            .expect("message")
            .contains("Amul Butter")
    );
}

#[tokio::test]
async fn update_cart_item_requires_quantity() {
    let server = mockito::Server::new_async().await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let err = executor
        .execute("update_cart_item", &json!({"product_id": "p1"}))
        .await
        .expect_err("missing quantity");
    assert!(err.is_invalid_params());
}

#[tokio::test]
async fn view_cart_composes_addresses_and_readiness() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/cart")
        .with_body(
            json!({"success": true, "data": {
                "cart": {"items": [
                    {"productId": "p1", "name": "Amul Butter", "price": 54.0, "quantity": 2}
                ]},
                "bill": {"total": 108.0, "freeDeliveryThreshold": 199.0}
            }})
            .to_string(),
        )
        .create_async()
        .await;

    server
        .mock("GET", "/addresses")
        .with_body(
            json!({"success": true, "data": {"addresses": [
                {"_id": "a1", "city": "Bengaluru", "isDefault": true, "isServiceable": true}
            ]}})
            .to_string(),
        )
        .create_async()
        .await;

    let api = client_for(&server);
    let executor = ToolExecutor::new(&api);
    let content = executor
        .execute("view_cart", &json!({}))
        .await
        .expect("view");

    let payload = text_payload(&content);
    assert_eq!(payload["success"], true);
    assert_eq!(payload["data"]["ready_for_checkout"], true);
    assert_eq!(payload["data"]["has_address"], true);
    assert_eq!(payload["data"]["selected_address"]["city"], "Bengaluru");
    assert!(
        payload["data"]["message"]
            .as_str()
            .expect("message")
            .contains("Ready for checkout")
    );
}
