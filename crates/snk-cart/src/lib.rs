//! snk-cart
//!
//! The cart ledger and its derived totals.
//! Pure deterministic logic (no IO, no time, no network).

pub mod ledger;

pub use ledger::{CartLedger, CartLine, CartSnapshot};
