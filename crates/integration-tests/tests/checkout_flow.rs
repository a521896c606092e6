//! Integration tests for the delivery gate and checkout completion.

use axum::http::StatusCode;
use unsold_flower_integration_tests::TestClient;

#[tokio::test]
async fn test_checkout_with_empty_cart_redirects_to_cart() {
    let mut client = TestClient::new();

    let response = client.get("/checkout").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/cart"));

    let response = client.post_form("/checkout/complete", "method=pickup").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/cart"));
}

#[tokio::test]
async fn test_delivery_refused_below_threshold() {
    let mut client = TestClient::new();
    // 8,000 + 1,500
    client.post_form("/product/5/cart", "").await;
    client.post_form("/product/6/cart", "").await;

    let response = client.get("/checkout?method=delivery").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("이용 불가"));
    assert!(response.body.contains(r#"name="method" value="pickup""#));
    assert!(response.body.contains("9,500원"));

    let response = client
        .post_form("/checkout/complete", "method=delivery")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("픽업"));
    assert!(!response.body.contains("새벽 배송"));
}

#[tokio::test]
async fn test_delivery_adds_fee_when_eligible() {
    let mut client = TestClient::new();
    client.post_form("/product/5/cart", "").await;
    client.post_form("/product/1/cart", "").await;

    let response = client.get("/checkout?method=delivery").await;
    assert!(response.body.contains(r#"name="method" value="delivery""#));
    assert!(response.body.contains("3,000원"));
    assert!(response.body.contains("15,500원"));

    let response = client
        .post_form("/checkout/complete", "method=delivery")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("주문이 완료되었습니다."));
    assert!(response.body.contains("새벽 배송"));
    assert!(response.body.contains("15,500원"));
}

#[tokio::test]
async fn test_checkout_completion_clears_cart() {
    let mut client = TestClient::new();
    client.post_form("/product/2/cart", "").await;

    let response = client.post_form("/checkout/complete", "method=pickup").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("주문이 완료되었습니다."));

    let response = client.get("/cart").await;
    assert!(response.body.contains("아직 담은 꽃이 없어요."));

    // Completion is not repeatable
    let response = client.post_form("/checkout/complete", "method=pickup").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_unknown_method_defaults_to_pickup() {
    let mut client = TestClient::new();
    client.post_form("/product/5/cart", "").await;
    client.post_form("/product/5/cart", "").await;

    let response = client.get("/checkout?method=drone").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"name="method" value="pickup""#));
}

#[tokio::test]
async fn test_completion_keeps_upstream_request_id() {
    let mut client = TestClient::new().with_request_id("edge-7f3a");
    client.post_form("/product/3/cart", "").await;

    let response = client.post_form("/checkout/complete", "method=pickup").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("edge-7f3a")
    );
}
