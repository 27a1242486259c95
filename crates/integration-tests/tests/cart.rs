//! Cart flows.

use axum::http::StatusCode;
use electromart_integration_tests::TestClient;
use electromart_storefront::config::StorefrontConfig;

fn empty_cart_client() -> TestClient {
    TestClient::with_config(StorefrontConfig {
        seed_demo_cart: false,
        ..StorefrontConfig::default()
    })
}

#[tokio::test]
async fn test_new_session_sees_demo_cart() {
    let mut client = TestClient::new();
    let response = client.get("/cart").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Premium Smartwatch Pro X"));
    assert!(response.body.contains("Wireless Headphones"));
    assert!(response.body.contains("Subtotal (3 items)"));
    assert!(response.body.contains("Proceed to Checkout"));
}

#[tokio::test]
async fn test_empty_cart() {
    let mut client = empty_cart_client();
    let response = client.get("/cart").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Your Cart is Empty"));
    assert!(!response.body.contains("Proceed to Checkout"));
}

#[tokio::test]
async fn test_add_to_cart_from_card() {
    let mut client = empty_cart_client();

    let response = client
        .post_form(
            "/cart/add",
            &[("product", "fp3"), ("quantity", "1"), ("return_to", "/products")],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/products"));

    let page = client.follow(&response).await;
    assert!(page.body.contains("Portable Bluetooth Speaker added to cart!"));
    assert!(page.body.contains("Quantity: 1"));
    assert!(page.body.contains("View Cart"));

    // Notices are shown once
    let page = client.get("/products").await;
    assert!(!page.body.contains("added to cart!"));

    let cart = client.get("/cart").await;
    assert!(cart.body.contains("Portable Bluetooth Speaker"));
    assert!(cart.body.contains("Subtotal (1 item)"));
}

#[tokio::test]
async fn test_add_from_detail_page_opens_dialog() {
    let mut client = empty_cart_client();

    let response = client
        .post_form(
            "/cart/add",
            &[
                ("product", "p123"),
                ("quantity", "2"),
                ("color", "silver"),
                ("size", "M/L"),
                ("return_to", "/products/p123?quantity=2"),
                ("confirm", "1"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location(),
        Some("/products/p123?quantity=2&added=2")
    );

    let page = client.follow(&response).await;
    assert!(page.body.contains("Added to Cart!"));
    assert!(page.body.contains("Premium Smartwatch Pro X (Qty: 2)"));
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let mut client = empty_cart_client();
    let response = client
        .post_form("/cart/add", &[("product", "nope"), ("quantity", "1")])
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_ignores_offsite_return_to() {
    let mut client = empty_cart_client();
    let response = client
        .post_form(
            "/cart/add",
            &[("product", "fp1"), ("return_to", "https://evil.example/")],
        )
        .await;
    assert_eq!(response.location(), Some("/products/fp1"));
}

#[tokio::test]
async fn test_update_quantity_is_clamped() {
    let mut client = empty_cart_client();
    client
        .post_form("/cart/add", &[("product", "fp1"), ("quantity", "1")])
        .await;

    let response = client
        .post_form("/cart/update", &[("line_id", "cart1"), ("quantity", "50")])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/cart"));

    let cart = client.get("/cart").await;
    assert!(cart.body.contains("Subtotal (10 items)"));

    // Stepper buttons win over the typed field
    client
        .post_form(
            "/cart/update",
            &[("line_id", "cart1"), ("quantity", "10"), ("step_to", "9")],
        )
        .await;
    let cart = client.get("/cart").await;
    assert!(cart.body.contains("Subtotal (9 items)"));

    // Junk input keeps the current quantity
    client
        .post_form("/cart/update", &[("line_id", "cart1"), ("quantity", "abc")])
        .await;
    let cart = client.get("/cart").await;
    assert!(cart.body.contains("Subtotal (9 items)"));
}

#[tokio::test]
async fn test_remove_line() {
    let mut client = TestClient::new();

    let response = client
        .post_form("/cart/remove", &[("line_id", "cart1")])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let cart = client.get("/cart").await;
    assert!(!cart.body.contains(">Premium Smartwatch Pro X</a>"));
    assert!(cart.body.contains("Subtotal (2 items)"));
}

#[tokio::test]
async fn test_cart_count_fragment() {
    let mut client = TestClient::new();
    let response = client.get("/cart/count").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(">3</span>"));
    assert!(!response.body.contains("<html"));
}
