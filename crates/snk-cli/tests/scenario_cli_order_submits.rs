//! `snk order` end to end against a mock backend.
//!
//! GREEN when:
//! - the documented order body is posted exactly once
//! - the confirmation names total and room
//! - bad destinations and load failures exit non-zero without posting

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

fn snk() -> Command {
    let mut cmd = Command::cargo_bin("snk").unwrap();
    cmd.env_remove("SNK_BACKEND_URL")
        .env_remove("SNK_TIMEOUT_MS")
        .env_remove("RUST_LOG");
    cmd
}

fn serve_catalog(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/snacks");
        then.status(200).json_body(json!([
            {"id": 1, "name": "chips", "price": 5, "image_url": "/img/chips.png"},
            {"id": 2, "name": "cola", "price": 3.5, "image_url": "/img/cola.png"}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/rooms");
        then.status(200).json_body(json!([
            {"number_string": "301", "floor": 3},
            {"number_string": "101", "floor": 1}
        ]));
    });
}

#[test]
fn order_posts_cart_and_prints_confirmation() {
    let server = MockServer::start();
    serve_catalog(&server);
    let order = server.mock(|when, then| {
        when.method(POST).path("/order").json_body(json!({
            "cart": [
                {"id": 1, "name": "chips", "price": 5, "image_url": "/img/chips.png", "quantity": 2}
            ],
            "room_number_string": "301"
        }));
        then.status(200).json_body(json!({"ok": true, "order_id": "ORD-000042"}));
    });

    snk()
        .args([
            "--backend-url",
            &server.base_url(),
            "order",
            "--item",
            "1",
            "--item",
            "1",
            "--floor",
            "3",
            "--room",
            "301",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "order_submitted=true",
        ))
        .stdout(predicate::str::contains("room=301 total_items=2 total_price=10"))
        .stdout(predicate::str::contains("order_id=ORD-000042"))
        .stdout(predicate::str::contains(
            "Order submitted! Total: ¥10, delivering to room 301",
        ));
    order.assert_hits(1);
}

#[test]
fn room_not_on_floor_is_rejected_before_posting() {
    let server = MockServer::start();
    serve_catalog(&server);
    let order = server.mock(|when, then| {
        when.method(POST).path("/order");
        then.status(200);
    });

    snk()
        .args([
            "--backend-url",
            &server.base_url(),
            "order",
            "--item",
            "2",
            "--floor",
            "1",
            "--room",
            "301",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --room"))
        .stderr(predicate::str::contains("room 301 is not on floor 1"));
    order.assert_hits(0);
}

#[test]
fn rejected_order_surfaces_backend_detail() {
    let server = MockServer::start();
    serve_catalog(&server);
    server.mock(|when, then| {
        when.method(POST).path("/order");
        then.status(422).json_body(json!({"error": "kitchen closed"}));
    });

    snk()
        .args([
            "--backend-url",
            &server.base_url(),
            "order",
            "--item",
            "2",
            "--floor",
            "3",
            "--room",
            "301",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Order submission failed: backend returned http 422",
        ))
        .stderr(predicate::str::contains("kitchen closed"));
}

#[test]
fn failed_room_load_aborts_one_shot_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/snacks");
        then.status(200).json_body(json!([
            {"id": 1, "name": "chips", "price": 5, "image_url": "/img/chips.png"}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/rooms");
        then.status(503);
    });

    snk()
        .args([
            "--backend-url",
            &server.base_url(),
            "order",
            "--item",
            "1",
            "--floor",
            "3",
            "--room",
            "301",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "could not load rooms: backend returned http 503",
        ));
}

#[test]
fn shell_reads_commands_from_stdin() {
    let server = MockServer::start();
    serve_catalog(&server);
    let order = server.mock(|when, then| {
        when.method(POST).path("/order");
        then.status(200).json_body(json!({"ok": true}));
    });

    snk()
        .args(["--backend-url", &server.base_url(), "shell"])
        .write_stdin("add 2\nadd 2\nfloor 1\nroom 101\nsubmit\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Order submitted! Total: ¥7, delivering to room 101",
        ));
    order.assert_hits(1);
}
