//! Cart ledger: the mutable state machine behind the shopping cart.
//!
//! # Invariants
//!
//! - **One line per snack id.** Adding a snack that is already in the cart
//!   bumps its quantity instead of appending a second line.
//! - **Quantities are >= 1.** Decrementing a line at quantity 1 removes it;
//!   a line is never retained at zero.
//! - **Insertion order is stable.** Lines stay in the order their snack was
//!   first added; quantity changes never reorder them.
//! - **Totals are derived.** `total_items` and `total_price` are computed on
//!   every read from the lines; there is no cached counter to drift.
//!
//! The write surface is `add_item`, `remove_item` and `clear`. There is no
//! way to assign a quantity directly, so the invariants above cannot be
//! violated from outside this module.

use serde::Serialize;
use snk_schemas::{OrderLine, Price, Snack, SnackId};

// ---------------------------------------------------------------------------
// CartLine
// ---------------------------------------------------------------------------

/// One distinct snack in the cart and how many of it were added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartLine {
    snack: Snack,
    quantity: u32,
}

impl CartLine {
    fn new(snack: Snack) -> Self {
        Self { snack, quantity: 1 }
    }

    pub fn snack(&self) -> &Snack {
        &self.snack
    }

    pub fn id(&self) -> SnackId {
        self.snack.id
    }

    /// Always >= 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity`, saturating.
    pub fn line_total(&self) -> Price {
        self.snack.price.saturating_mul_qty(self.quantity)
    }

    pub fn to_order_line(&self) -> OrderLine {
        OrderLine {
            snack: self.snack.clone(),
            quantity: self.quantity,
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot (read-only view)
// ---------------------------------------------------------------------------

/// A point-in-time copy of the cart with both totals resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total_items: u64,
    pub total_price: Price,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CartLedger
// ---------------------------------------------------------------------------

/// Ordered collection of [`CartLine`]s keyed by snack id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Write surface
    // -----------------------------------------------------------------------

    /// Add one unit of `snack`.
    ///
    /// Increments the existing line for `snack.id`, or appends a new line with
    /// quantity 1. The first snapshot of a snack's fields wins; later adds
    /// only touch the quantity.
    pub fn add_item(&mut self, snack: &Snack) {
        match self.position(snack.id) {
            Some(i) => {
                let line = &mut self.lines[i];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.lines.push(CartLine::new(snack.clone())),
        }
    }

    /// Remove one unit of snack `id`.
    ///
    /// Quantity > 1 is decremented; quantity 1 drops the line; an id that is
    /// not in the cart is a no-op. Returns `true` if the cart changed.
    pub fn remove_item(&mut self, id: SnackId) -> bool {
        let Some(i) = self.position(id) else {
            return false;
        };
        if self.lines[i].quantity > 1 {
            self.lines[i].quantity -= 1;
        } else {
            self.lines.remove(i);
        }
        true
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct snacks in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity held for `id` (0 if absent).
    pub fn quantity_of(&self, id: SnackId) -> u32 {
        self.position(id).map(|i| self.lines[i].quantity).unwrap_or(0)
    }

    /// Σ quantity.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Σ price × quantity.
    pub fn total_price(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::ZERO, |acc, l| acc.saturating_add(l.line_total()))
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }

    /// Wire form of every line, in cart order.
    pub fn to_order_lines(&self) -> Vec<OrderLine> {
        self.lines.iter().map(CartLine::to_order_line).collect()
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn position(&self, id: SnackId) -> Option<usize> {
        self.lines.iter().position(|l| l.snack.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
