//! `snk menu` / `snk rooms` against a mock backend.
//!
//! GREEN when:
//! - listings are printed as key=value lines in backend order
//! - rooms are grouped by floor in discovery order
//! - an unreachable backend is a non-zero exit

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

#[test]
fn menu_lists_snacks_in_backend_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/snacks");
        then.status(200).json_body(json!([
            {"id": 2, "name": "cola", "price": 3.5, "image_url": "/img/cola.png"},
            {"id": 1, "name": "chips", "price": 5, "image_url": "/img/chips.png"}
        ]));
    });

    snk()
        .args(["--backend-url", &server.base_url(), "menu"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "snack id=2 name=cola price=3.5\nsnack id=1 name=chips price=5\nsnacks=2",
        ));
}

#[test]
fn rooms_are_grouped_by_floor() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rooms");
        then.status(200).json_body(json!([
            {"number_string": "201", "floor": 2},
            {"number_string": "101", "floor": 1},
            {"number_string": "202", "floor": 2}
        ]));
    });

    snk()
        .args(["rooms", "--backend-url", &server.base_url()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "floor=2 rooms=201,202\nfloor=1 rooms=101\nfloors=2 rooms=3",
        ));
}

#[test]
fn unreachable_backend_fails() {
    snk()
        .args(["--backend-url", "http://127.0.0.1:1", "menu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fetch snacks"));
}

#[test]
fn backend_url_from_env_is_used() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(GET).path("/snacks");
        then.status(200).json_body(json!([]));
    });

    snk()
        .env("SNK_BACKEND_URL", server.base_url())
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("snacks=0"));
    m.assert();
}

#[test]
fn invalid_backend_url_is_rejected() {
    snk()
        .args(["--backend-url", "ftp://shop", "menu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --backend-url"));
}
