//! Integration tests for the durable cart slot.
//!
//! The cart is written to `{data_dir}/marineHarvestCart.json` after every
//! mutation and restored when the server starts.

use marine_harvest_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn add(ctx: &TestContext, collection: &str, product_id: &str) -> Value {
    let resp = ctx
        .client
        .post(ctx.url("/cart/add"))
        .form(&[("collection", collection), ("product_id", product_id)])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

async fn cart(ctx: &TestContext) -> Value {
    ctx.client
        .get(ctx.url("/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_cart_survives_restart() {
    let ctx = TestContext::start().await;
    add(&ctx, "marine", "lobster-live").await;
    add(&ctx, "marine", "lobster-live").await;
    add(&ctx, "sustainable", "organic-fish-feed").await;

    let ctx = ctx.restart().await;
    let body = cart(&ctx).await;

    assert_eq!(body["item_count"], 3);
    assert_eq!(body["lines"][0]["product_id"], "lobster-live");
    assert_eq!(body["lines"][0]["quantity"], 2);
    assert_eq!(body["lines"][1]["product_id"], "organic-fish-feed");
    assert_eq!(body["is_open"], false);
}

#[tokio::test]
async fn test_slot_holds_json_array_of_lines() {
    let ctx = TestContext::start().await;
    add(&ctx, "marine", "seaweed-nori").await;

    let stored: Value = serde_json::from_str(&ctx.stored_cart().unwrap()).unwrap();
    assert_eq!(stored[0]["product"]["id"], "seaweed-nori");
    assert_eq!(stored[0]["product"]["price"], json!(8.99));
    assert_eq!(stored[0]["quantity"], 1);
    assert!(ctx.data_dir().join("marineHarvestCart.json").exists());
}

#[tokio::test]
async fn test_corrupt_slot_starts_empty() {
    for payload in ["", "not json", r#"{"product":{}}"#, "[{\"quantity\":0}]"] {
        let ctx = TestContext::start_with_cart(payload).await;
        let body = cart(&ctx).await;
        assert_eq!(body["item_count"], 0, "payload {payload:?}");
    }
}

#[tokio::test]
async fn test_seeded_slot_is_restored() {
    let payload = json!([{
        "product": {
            "id": "underwater-drone",
            "name": "Underwater Inspection Drone",
            "price": 1299.99,
            "image": "drone.jpg",
            "category": "Monitoring",
            "description": "Remote-operated drone"
        },
        "quantity": 2
    }]);

    let ctx = TestContext::start_with_cart(&payload.to_string()).await;
    let body = cart(&ctx).await;

    assert_eq!(body["item_count"], 2);
    assert_eq!(body["total_display"], "$2599.98");
}

#[tokio::test]
async fn test_clear_persists_empty_array() {
    let ctx = TestContext::start().await;
    add(&ctx, "farming", "water-pump").await;

    ctx.client
        .post(ctx.url("/cart/clear"))
        .send()
        .await
        .unwrap();

    assert_eq!(ctx.stored_cart().as_deref(), Some("[]"));
}
