//! HTTP backend contract against a local mock server (no real network).
//!
//! GREEN when:
//! - /snacks and /rooms decode in backend order
//! - /order receives the exact documented body
//! - non-2xx, malformed JSON, timeouts and refused connections map to the
//!   right `BackendError` variants

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use snk_client::{BackendError, HttpShopBackend, ShopBackend};
use snk_schemas::{OrderLine, OrderRequest, Price, Snack};

fn backend(server: &MockServer) -> HttpShopBackend {
    HttpShopBackend::new(server.base_url(), Duration::from_secs(2)).unwrap()
}

fn chips() -> Snack {
    Snack {
        id: 1,
        name: "chips".to_string(),
        price: Price::from_units(5),
        image_url: "/img/chips.png".to_string(),
    }
}

#[tokio::test]
async fn fetch_snacks_decodes_catalog_in_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/snacks");
            then.status(200).json_body(json!([
                {"id": 2, "name": "cola", "price": 3.5, "image_url": "/img/cola.png"},
                {"id": 1, "name": "chips", "price": 5, "image_url": "/img/chips.png"}
            ]));
        })
        .await;

    let snacks = backend(&server).fetch_snacks().await.unwrap();
    mock.assert_async().await;

    assert_eq!(snacks.len(), 2);
    assert_eq!(snacks[0].id, 2);
    assert_eq!(snacks[0].price, Price::from_micros(3_500_000));
    assert_eq!(snacks[1], chips());
}

#[tokio::test]
async fn fetch_rooms_decodes_directory() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rooms");
            then.status(200).json_body(json!([
                {"number_string": "201", "floor": 2},
                {"number_string": "101", "floor": 1}
            ]));
        })
        .await;

    let rooms = backend(&server).fetch_rooms().await.unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].number_string, "201");
    assert_eq!(rooms[1].floor, 1);
}

#[tokio::test]
async fn submit_order_posts_documented_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/order").json_body(json!({
                "cart": [
                    {"id": 1, "name": "chips", "price": 5, "image_url": "/img/chips.png", "quantity": 2}
                ],
                "room_number_string": "301"
            }));
            then.status(200).json_body(json!({"order_id": "ORD-000001"}));
        })
        .await;

    let req = OrderRequest {
        cart: vec![OrderLine {
            snack: chips(),
            quantity: 2,
        }],
        room_number_string: "301".to_string(),
    };
    let ack = backend(&server).submit_order(&req).await.unwrap();
    mock.assert_async().await;
    assert_eq!(ack.order_id(), Some("ORD-000001"));
}

#[tokio::test]
async fn submit_order_accepts_empty_success_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/order");
            then.status(204);
        })
        .await;

    let req = OrderRequest {
        cart: vec![OrderLine {
            snack: chips(),
            quantity: 1,
        }],
        room_number_string: "101".to_string(),
    };
    let ack = backend(&server).submit_order(&req).await.unwrap();
    assert_eq!(ack.0, serde_json::Value::Null);
}

#[tokio::test]
async fn non_success_status_is_status_error_with_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/order");
            then.status(422).body("room 999 does not exist");
        })
        .await;

    let req = OrderRequest {
        cart: vec![],
        room_number_string: "999".to_string(),
    };
    let err = backend(&server).submit_order(&req).await.unwrap_err();
    assert_eq!(
        err,
        BackendError::Status {
            status: 422,
            body: "room 999 does not exist".to_string()
        }
    );
}

#[tokio::test]
async fn malformed_catalog_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/snacks");
            then.status(200)
                .json_body(json!([{"id": 1, "name": "chips", "price": -5, "image_url": ""}]));
        })
        .await;

    let err = backend(&server).fetch_snacks().await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_backend_times_out_as_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rooms");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!([]));
        })
        .await;

    let b = HttpShopBackend::new(server.base_url(), Duration::from_millis(50)).unwrap();
    let err = b.fetch_rooms().await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    // Port 1 is privileged and never served in test environments.
    let b = HttpShopBackend::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
    let err = b.fetch_snacks().await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)), "got {err:?}");
}
