//! snk-schemas
//!
//! Wire types shared by the client, the session and the reference backend.
//! Field names match the backend's JSON exactly (`image_url`,
//! `number_string`, `room_number_string`).

mod price;

pub use price::{Price, PriceError, MICROS_PER_UNIT};

use serde::{Deserialize, Serialize};

/// Catalog identifier of a snack.
pub type SnackId = i64;

/// Floor number as published by the room directory.
pub type Floor = i32;

/// A purchasable item as returned by `GET /snacks`. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snack {
    pub id: SnackId,
    pub name: String,
    pub price: Price,
    pub image_url: String,
}

/// A deliverable room as returned by `GET /rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number_string: String,
    pub floor: Floor,
}

/// One cart entry on the wire: every snack field plus `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(flatten)]
    pub snack: Snack,
    pub quantity: u32,
}

/// Body of `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub cart: Vec<OrderLine>,
    pub room_number_string: String,
}

impl OrderRequest {
    pub fn total_items(&self) -> u64 {
        self.cart.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total_price(&self) -> Price {
        self.cart.iter().fold(Price::ZERO, |acc, l| {
            acc.saturating_add(l.snack.price.saturating_mul_qty(l.quantity))
        })
    }
}

/// Whatever the order service answered with on success.
///
/// The shape is backend-defined. An empty body is `Null`; a body that is not
/// JSON is kept verbatim as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderAck(pub serde_json::Value);

impl OrderAck {
    pub fn empty() -> Self {
        OrderAck(serde_json::Value::Null)
    }

    /// Order identifier assigned by the backend, if it reported one.
    pub fn order_id(&self) -> Option<&str> {
        self.0.get("order_id").and_then(|v| v.as_str())
    }
}
