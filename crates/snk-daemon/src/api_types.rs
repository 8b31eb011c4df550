//! Request and response types for the snk-daemon HTTP endpoints.
//!
//! Catalog and order payloads reuse `snk_schemas`; only daemon-specific
//! shapes live here. No business logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snk_schemas::{OrderLine, Price};

// ---------------------------------------------------------------------------
// /v1/health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
    pub snacks: usize,
    pub rooms: usize,
}

// ---------------------------------------------------------------------------
// POST /order
// ---------------------------------------------------------------------------

/// Body of a 200 answer to `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAcceptedResponse {
    pub ok: bool,
    pub order_id: String,
    /// Priced from the daemon's own catalog, not from the request.
    pub total_price: Price,
    pub room_number_string: String,
    pub item_count: u64,
}

/// Body of a 422 answer to `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRejectedResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// /v1/orders
// ---------------------------------------------------------------------------

/// An accepted order as the daemon recorded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedOrder {
    pub order_id: String,
    pub received_at_utc: DateTime<Utc>,
    pub room_number_string: String,
    pub total_price: Price,
    pub item_count: u64,
    pub cart: Vec<OrderLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<RecordedOrder>,
}
