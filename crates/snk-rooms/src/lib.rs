//! snk-rooms
//!
//! Room directory grouping and the floor → room selection state.
//! Pure deterministic logic.

pub mod index;
pub mod selection;

pub use index::{FloorGroup, RoomIndex};
pub use selection::{Selection, SelectionError};
