//! One user's ordering session.
//!
//! Composes the catalog cache, the room index, the cart ledger and the
//! floor/room selection, and runs the submission flow against a
//! [`ShopBackend`].
//!
//! # Submission rules
//!
//! - Success clears the cart and keeps the selection, so the next order can
//!   go to the same room.
//! - Failure leaves cart and selection untouched. There is no automatic
//!   retry; the caller may simply submit again.
//!
//! All mutation goes through `&mut self`, so a session is driven by one
//! event loop at a time.

use chrono::Utc;
use snk_cart::CartLedger;
use snk_client::{BackendError, ShopBackend};
use snk_rooms::{RoomIndex, Selection, SelectionError};
use snk_schemas::{Floor, OrderAck, OrderRequest, Snack, SnackId};
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::load::{LoadNotice, LoadSource};
use crate::submit::{
    confirmation_message, failure_message, stale_message, OrderReceipt, PendingOrder,
    SubmitBlocked, SubmitOutcome,
};
use crate::SessionError;

const DEFAULT_CURRENCY: &str = "¥";

#[derive(Debug, Clone)]
pub struct ShopSession {
    catalog: Catalog,
    rooms: RoomIndex,
    cart: CartLedger,
    selection: Selection,
    in_flight: Option<Uuid>,
    notices: Vec<LoadNotice>,
    currency_symbol: String,
}

impl ShopSession {
    /// Session over already-fetched data.
    pub fn new(catalog: Catalog, rooms: RoomIndex) -> Self {
        Self {
            catalog,
            rooms,
            cart: CartLedger::new(),
            selection: Selection::new(),
            in_flight: None,
            notices: Vec::new(),
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Fetch catalog and rooms concurrently and build a session.
    ///
    /// A failed fetch leaves that collection empty and records a
    /// [`LoadNotice`]; the other fetch is unaffected.
    pub async fn load(backend: &dyn ShopBackend) -> Self {
        let (snacks, rooms) = tokio::join!(backend.fetch_snacks(), backend.fetch_rooms());
        let mut notices = Vec::new();

        let snacks = snacks.unwrap_or_else(|e| {
            warn!(backend = backend.name(), error = %e, "catalog fetch failed; showing no snacks");
            notices.push(LoadNotice::new(LoadSource::Catalog, &e));
            Vec::new()
        });
        let rooms = rooms.unwrap_or_else(|e| {
            warn!(backend = backend.name(), error = %e, "room fetch failed; no rooms selectable");
            notices.push(LoadNotice::new(LoadSource::Rooms, &e));
            Vec::new()
        });

        let index = RoomIndex::build(&rooms);
        info!(
            backend = backend.name(),
            snacks = snacks.len(),
            floors = index.floor_count(),
            rooms = index.room_count(),
            "session loaded"
        );

        let mut session = Self::new(Catalog::new(snacks), index);
        session.notices = notices;
        session
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rooms(&self) -> &RoomIndex {
        &self.rooms
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Load-time fetch failures, in the order they were recorded.
    pub fn notices(&self) -> &[LoadNotice] {
        &self.notices
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    // -----------------------------------------------------------------------
    // Cart
    // -----------------------------------------------------------------------

    /// Add one unit of catalog snack `id`.
    pub fn add_to_cart(&mut self, id: SnackId) -> Result<(), SessionError> {
        let snack = self
            .catalog
            .get(id)
            .ok_or(SessionError::UnknownSnack { id })?;
        self.cart.add_item(snack);
        Ok(())
    }

    /// Add one unit of `snack` as-is (e.g. the "+" on an existing cart line).
    pub fn add_snack(&mut self, snack: &Snack) {
        self.cart.add_item(snack);
    }

    /// Remove one unit of `id`; `false` if it was not in the cart.
    pub fn remove_from_cart(&mut self, id: SnackId) -> bool {
        self.cart.remove_item(id)
    }

    // -----------------------------------------------------------------------
    // Destination
    // -----------------------------------------------------------------------

    /// Change the floor (resets the room). Unknown floors are rejected.
    pub fn choose_floor(&mut self, floor: Option<Floor>) -> Result<(), SelectionError> {
        self.selection.choose_floor(&self.rooms, floor)
    }

    /// Pick a room on the current floor.
    pub fn choose_room(&mut self, room: &str) -> Result<(), SelectionError> {
        self.selection.choose_room(&self.rooms, room)
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// First gate condition that blocks a submission, if any.
    pub fn submit_gate(&self) -> Result<(), SubmitBlocked> {
        if let Some(attempt_id) = self.in_flight {
            return Err(SubmitBlocked::InFlight { attempt_id });
        }
        self.build_order_request().map(|_| ())
    }

    pub fn can_submit(&self) -> bool {
        self.submit_gate().is_ok()
    }

    /// Order payload from the current cart and room.
    pub fn build_order_request(&self) -> Result<OrderRequest, SubmitBlocked> {
        if self.cart.is_empty() {
            return Err(SubmitBlocked::EmptyCart);
        }
        let room = self.selection.room().ok_or(SubmitBlocked::NoRoomSelected)?;
        Ok(OrderRequest {
            cart: self.cart.to_order_lines(),
            room_number_string: room.to_string(),
        })
    }

    /// Check the gate, mark a submission in flight and snapshot the order.
    pub fn begin_submission(&mut self) -> Result<PendingOrder, SubmitBlocked> {
        self.submit_gate()?;
        let pending = PendingOrder::new(self.build_order_request()?);
        self.in_flight = Some(pending.attempt_id);
        info!(
            attempt_id = %pending.attempt_id,
            room = pending.room(),
            items = pending.total_items,
            "order submission started"
        );
        Ok(pending)
    }

    /// Apply the backend's answer to a submission started by
    /// [`begin_submission`](Self::begin_submission).
    ///
    /// Only the attempt currently in flight is applied. Any other attempt
    /// yields [`SubmitOutcome::Stale`] and leaves cart, selection and the
    /// in-flight mark untouched.
    pub fn complete_submission(
        &mut self,
        pending: PendingOrder,
        result: Result<OrderAck, BackendError>,
    ) -> SubmitOutcome {
        if self.in_flight != Some(pending.attempt_id) {
            warn!(
                attempt_id = %pending.attempt_id,
                current = ?self.in_flight,
                "ignoring completion of a submission that is not in flight"
            );
            return SubmitOutcome::Stale {
                attempt_id: pending.attempt_id,
                message: stale_message(pending.attempt_id),
            };
        }
        self.in_flight = None;

        match result {
            Ok(ack) => {
                self.cart.clear();
                let message =
                    confirmation_message(&self.currency_symbol, pending.total_price, pending.room());
                info!(
                    attempt_id = %pending.attempt_id,
                    order_id = ack.order_id().unwrap_or("-"),
                    "order confirmed"
                );
                SubmitOutcome::Confirmed {
                    receipt: OrderReceipt {
                        attempt_id: pending.attempt_id,
                        submitted_at_utc: Utc::now(),
                        room_number_string: pending.request.room_number_string,
                        total_price: pending.total_price,
                        total_items: pending.total_items,
                        ack,
                    },
                    message,
                }
            }
            Err(error) => {
                warn!(attempt_id = %pending.attempt_id, error = %error, "order submission failed");
                SubmitOutcome::Failed {
                    attempt_id: pending.attempt_id,
                    message: failure_message(&error),
                    error,
                }
            }
        }
    }

    /// Gate, send, and apply the result in one step.
    pub async fn submit(
        &mut self,
        backend: &dyn ShopBackend,
    ) -> Result<SubmitOutcome, SubmitBlocked> {
        let pending = self.begin_submission()?;
        let result = backend.submit_order(&pending.request).await;
        Ok(self.complete_submission(pending, result))
    }
}
