//! Order validation and the in-memory order book.
//!
//! The daemon prices every accepted order from its own catalog; the prices
//! a client sends are informational only.

use chrono::Utc;
use snk_rooms::RoomIndex;
use snk_schemas::{OrderRequest, Price, SnackId};

use crate::api_types::RecordedOrder;
use crate::fixture::ShopFixture;

/// Why an order was refused (422).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRejection {
    Malformed(String),
    EmptyCart,
    ZeroQuantity { id: SnackId },
    DuplicateLine { id: SnackId },
    UnknownSnack { id: SnackId },
    UnknownRoom { room: String },
}

impl std::fmt::Display for OrderRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderRejection::Malformed(msg) => write!(f, "malformed order: {msg}"),
            OrderRejection::EmptyCart => write!(f, "cart is empty"),
            OrderRejection::ZeroQuantity { id } => {
                write!(f, "snack {id} has quantity 0")
            }
            OrderRejection::DuplicateLine { id } => {
                write!(f, "snack {id} appears on more than one cart line")
            }
            OrderRejection::UnknownSnack { id } => write!(f, "snack {id} is not on the menu"),
            OrderRejection::UnknownRoom { room } => write!(f, "room {room} does not exist"),
        }
    }
}

impl std::error::Error for OrderRejection {}

/// Totals of an order that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedOrder {
    pub total_price: Price,
    pub item_count: u64,
}

/// Check `req` against the shop data and price it.
///
/// Rules are checked in this order: non-empty cart, each line (quantity,
/// duplicate id, known snack), then the room.
pub fn price_order(
    fixture: &ShopFixture,
    rooms: &RoomIndex,
    req: &OrderRequest,
) -> Result<PricedOrder, OrderRejection> {
    if req.cart.is_empty() {
        return Err(OrderRejection::EmptyCart);
    }

    let mut seen: Vec<SnackId> = Vec::with_capacity(req.cart.len());
    let mut total_price = Price::ZERO;
    let mut item_count = 0u64;
    for line in &req.cart {
        let id = line.snack.id;
        if line.quantity == 0 {
            return Err(OrderRejection::ZeroQuantity { id });
        }
        if seen.contains(&id) {
            return Err(OrderRejection::DuplicateLine { id });
        }
        seen.push(id);

        let snack = fixture
            .snacks
            .iter()
            .find(|s| s.id == id)
            .ok_or(OrderRejection::UnknownSnack { id })?;
        total_price = total_price.saturating_add(snack.price.saturating_mul_qty(line.quantity));
        item_count += u64::from(line.quantity);
    }

    let room = &req.room_number_string;
    let known = rooms
        .groups()
        .iter()
        .any(|g| g.rooms.iter().any(|r| r == room));
    if !known {
        return Err(OrderRejection::UnknownRoom { room: room.clone() });
    }

    Ok(PricedOrder {
        total_price,
        item_count,
    })
}

/// Accepted orders, oldest first, with a monotonically increasing id.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<RecordedOrder>,
    next_seq: u64,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, req: OrderRequest, priced: PricedOrder) -> RecordedOrder {
        self.next_seq += 1;
        let order = RecordedOrder {
            order_id: format!("ORD-{:06}", self.next_seq),
            received_at_utc: Utc::now(),
            room_number_string: req.room_number_string,
            total_price: priced.total_price,
            item_count: priced.item_count,
            cart: req.cart,
        };
        self.orders.push(order.clone());
        order
    }

    pub fn orders(&self) -> &[RecordedOrder] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
