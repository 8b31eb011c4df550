//! Submission gate, pending-order snapshot and outcomes.
//!
//! # Gate
//!
//! A submission may start only when:
//!
//! 1. no other submission is in flight,
//! 2. the cart is non-empty,
//! 3. a room is selected.
//!
//! Conditions are checked in that order and the first failure is reported.
//! The gate is a client-side check; the backend still validates the order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use snk_client::BackendError;
use snk_schemas::{OrderAck, OrderRequest, Price};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// SubmitBlocked
// ---------------------------------------------------------------------------

/// Why a submission cannot start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not completed yet.
    InFlight { attempt_id: Uuid },
    EmptyCart,
    NoRoomSelected,
}

impl std::fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitBlocked::InFlight { attempt_id } => {
                write!(f, "an order is already being submitted (attempt {attempt_id})")
            }
            SubmitBlocked::EmptyCart => write!(f, "cart is empty"),
            SubmitBlocked::NoRoomSelected => write!(f, "no delivery room selected"),
        }
    }
}

impl std::error::Error for SubmitBlocked {}

// ---------------------------------------------------------------------------
// PendingOrder
// ---------------------------------------------------------------------------

/// Snapshot taken when a submission starts.
///
/// Totals are frozen here so the confirmation reports what was actually sent,
/// even if the cart is touched while the request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    pub attempt_id: Uuid,
    pub request: OrderRequest,
    pub total_price: Price,
    pub total_items: u64,
}

impl PendingOrder {
    pub(crate) fn new(request: OrderRequest) -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            total_price: request.total_price(),
            total_items: request.total_items(),
            request,
        }
    }

    pub fn room(&self) -> &str {
        &self.request.room_number_string
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Proof of an acknowledged order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub attempt_id: Uuid,
    pub submitted_at_utc: DateTime<Utc>,
    pub room_number_string: String,
    pub total_price: Price,
    pub total_items: u64,
    pub ack: OrderAck,
}

/// Result of one completed submission attempt.
///
/// Every variant carries the message to show the user.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Confirmed {
        receipt: OrderReceipt,
        message: String,
    },
    Failed {
        attempt_id: Uuid,
        error: BackendError,
        message: String,
    },
    /// The completion belonged to an attempt that is not the one in flight;
    /// nothing was applied.
    Stale { attempt_id: Uuid, message: String },
}

impl SubmitOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Confirmed { message, .. }
            | SubmitOutcome::Failed { message, .. }
            | SubmitOutcome::Stale { message, .. } => message,
        }
    }

    pub fn attempt_id(&self) -> Uuid {
        match self {
            SubmitOutcome::Confirmed { receipt, .. } => receipt.attempt_id,
            SubmitOutcome::Failed { attempt_id, .. }
            | SubmitOutcome::Stale { attempt_id, .. } => *attempt_id,
        }
    }
}

pub(crate) fn confirmation_message(currency: &str, total: Price, room: &str) -> String {
    format!("Order submitted! Total: {currency}{total}, delivering to room {room}")
}

pub(crate) fn failure_message(error: &BackendError) -> String {
    format!("Order submission failed: {error}")
}

pub(crate) fn stale_message(attempt_id: Uuid) -> String {
    format!("Ignored result of submission {attempt_id}: it is no longer in flight")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_names_total_and_room() {
        assert_eq!(
            confirmation_message("¥", Price::from_units(10), "301"),
            "Order submitted! Total: ¥10, delivering to room 301"
        );
    }

    #[test]
    fn failure_carries_error_detail() {
        let msg = failure_message(&BackendError::Transport("connection reset".to_string()));
        assert_eq!(
            msg,
            "Order submission failed: transport error: connection reset"
        );
    }

    #[test]
    fn blocked_display() {
        assert_eq!(SubmitBlocked::EmptyCart.to_string(), "cart is empty");
        assert_eq!(
            SubmitBlocked::NoRoomSelected.to_string(),
            "no delivery room selected"
        );
    }
}
