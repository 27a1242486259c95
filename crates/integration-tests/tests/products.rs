//! Product listing and detail pages.

use axum::http::StatusCode;
use electromart_integration_tests::TestClient;

#[tokio::test]
async fn test_listing_first_page() {
    let mut client = TestClient::new();
    let response = client.get("/products").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("12 products"));
    assert!(response.body.contains(">Awesome Gadget 1</a>"));
    // Nine per page: the tenth product is on page two
    assert!(!response.body.contains(">Awesome Gadget 10</a>"));
    assert!(response.body.contains("rel=\"next\""));
}

#[tokio::test]
async fn test_listing_second_page() {
    let mut client = TestClient::new();
    let response = client.get("/products?page=2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(">Awesome Gadget 10</a>"));
    assert!(response.body.contains("rel=\"prev\""));
}

#[tokio::test]
async fn test_listing_category_filter() {
    let mut client = TestClient::new();
    let response = client.get("/products?category=Electronics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("4 products"));
    assert!(response.body.contains(">Awesome Gadget 1</a>"));
    assert!(!response.body.contains(">Awesome Gadget 2</a>"));
    assert!(response.body.contains("value=\"Electronics\" checked"));
}

#[tokio::test]
async fn test_listing_empty_state() {
    let mut client = TestClient::new();
    let response = client.get("/products?min_price=999&max_price=999").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("No Products Found"));
}

#[tokio::test]
async fn test_detail_page() {
    let mut client = TestClient::new();
    let response = client.get("/products/p123").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<h1 id=\"product-name\">Premium Smartwatch Pro X</h1>"));
    assert!(response.body.contains("Full Description"));
    assert!(response.body.contains("Reviews (2)"));
    assert!(response.body.contains("Color: <span class=\"option-value\">Midnight Black</span>"));
    assert!(response.body.contains("You Might Also Like"));
}

#[tokio::test]
async fn test_detail_page_tabs_and_options() {
    let mut client = TestClient::new();

    let response = client.get("/products/p123?tab=reviews").await;
    assert!(response.body.contains("Alice Wonderland"));
    assert!(response.body.contains("Was this review helpful?"));

    let response = client.get("/products/p123?tab=specifications").await;
    assert!(response.body.contains("class=\"spec-list\""));

    let response = client.get("/products/p123?step_to=4").await;
    assert!(response.body.contains("name=\"quantity\" value=\"4\""));

    // Above the line maximum clamps to it
    let response = client.get("/products/p123?quantity=99").await;
    assert!(response.body.contains("name=\"quantity\" value=\"10\""));
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let mut client = TestClient::new();
    let response = client.get("/products/nope").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_vote_switches_direction() {
    let mut client = TestClient::new();

    let response = client
        .post_form("/products/p123/reviews/r1/vote", &[("direction", "up")])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location(),
        Some("/products/p123?tab=reviews#review-r1")
    );

    let page = client.follow(&response).await;
    assert!(page.body.contains("aria-pressed=\"true\""));

    // Switching direction moves the vote
    client
        .post_form("/products/p123/reviews/r1/vote", &[("direction", "down")])
        .await;
    let page = client.get("/products/p123?tab=reviews").await;
    assert!(page.body.contains("value=\"down\" class=\"btn btn-ghost btn-sm is-active\""));
    assert!(page.body.contains("value=\"up\" class=\"btn btn-ghost btn-sm\""));
}

#[tokio::test]
async fn test_review_vote_rejects_bad_input() {
    let mut client = TestClient::new();

    let response = client
        .post_form("/products/p123/reviews/r1/vote", &[("direction", "sideways")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = client
        .post_form("/products/p123/reviews/r9/vote", &[("direction", "up")])
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wishlist() {
    let mut client = TestClient::new();

    let response = client
        .post_form("/products/p123/wishlist", &[("return_to", "/products/p123")])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/products/p123"));

    let page = client.follow(&response).await;
    assert!(page.body.contains("Premium Smartwatch Pro X added to wishlist!"));
    assert!(page.body.contains("In Wishlist"));
}
