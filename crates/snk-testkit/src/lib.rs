//! snk-testkit
//!
//! Shared fixtures and an in-memory [`ShopBackend`] for scenario tests.

mod fake_backend;

pub use fake_backend::FakeBackend;

use snk_schemas::{Price, Room, Snack};

pub fn snack(id: i64, name: &str, price: Price) -> Snack {
    Snack {
        id,
        name: name.to_string(),
        price,
        image_url: format!("/img/{name}.png"),
    }
}

pub fn room(number_string: &str, floor: i32) -> Room {
    Room {
        number_string: number_string.to_string(),
        floor,
    }
}

/// chips ¥5, cola ¥3.5, gum ¥1.
pub fn sample_snacks() -> Vec<Snack> {
    vec![
        snack(1, "chips", Price::from_units(5)),
        snack(2, "cola", Price::from_micros(3_500_000)),
        snack(3, "gum", Price::from_units(1)),
    ]
}

/// Floors in discovery order 3, 1, 2; floor 3 has two rooms.
pub fn sample_rooms() -> Vec<Room> {
    vec![
        room("301", 3),
        room("101", 1),
        room("302", 3),
        room("201", 2),
    ]
}

// Re-exported for tests that only depend on the testkit.
pub use snk_client::{BackendError, ShopBackend};
