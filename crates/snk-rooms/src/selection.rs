//! Two-step destination selection (floor, then room).
//!
//! # Invariant
//!
//! Setting the floor, to any value including `None`, resets the room. A
//! room choice is only meaningful against the option list of the floor that
//! produced it. Setting the room never touches the floor.
//!
//! This type only holds state. Checking that a floor or room actually exists
//! in the [`RoomIndex`](crate::RoomIndex) is done by [`Selection::choose_floor`]
//! and [`Selection::choose_room`].

use serde::Serialize;
use snk_schemas::Floor;

use crate::RoomIndex;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A floor or room choice that does not match the room directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The floor is not in the room directory.
    UnknownFloor { floor: Floor },
    /// A room was chosen before any floor.
    NoFloorSelected,
    /// The room is not listed under the selected floor.
    UnknownRoom { floor: Floor, room: String },
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFloor { floor } => write!(f, "floor {floor} has no deliverable rooms"),
            Self::NoFloorSelected => write!(f, "select a floor before choosing a room"),
            Self::UnknownRoom { floor, room } => {
                write!(f, "room {room} is not on floor {floor}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    floor: Option<Floor>,
    room: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floor(&self) -> Option<Floor> {
        self.floor
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    /// Set the floor and reset the room, unconditionally.
    pub fn set_floor(&mut self, floor: Option<Floor>) {
        self.floor = floor;
        self.room = None;
    }

    /// Set the room. The floor is left alone.
    pub fn set_room(&mut self, room: Option<String>) {
        self.room = room;
    }

    /// Validated floor change: `Some(floor)` must be in `index`.
    ///
    /// On error the selection is unchanged. `None` is always accepted.
    pub fn choose_floor(
        &mut self,
        index: &RoomIndex,
        floor: Option<Floor>,
    ) -> Result<(), SelectionError> {
        if let Some(f) = floor {
            if !index.has_floor(f) {
                return Err(SelectionError::UnknownFloor { floor: f });
            }
        }
        self.set_floor(floor);
        Ok(())
    }

    /// Validated room change: `room` must be listed under the current floor.
    ///
    /// On error the selection is unchanged.
    pub fn choose_room(&mut self, index: &RoomIndex, room: &str) -> Result<(), SelectionError> {
        let floor = self.floor.ok_or(SelectionError::NoFloorSelected)?;
        if !index.contains(floor, room) {
            return Err(SelectionError::UnknownRoom {
                floor,
                room: room.to_string(),
            });
        }
        self.set_room(Some(room.to_string()));
        Ok(())
    }

    /// `true` once a room is chosen; the submit gate only needs this.
    pub fn is_complete(&self) -> bool {
        self.room.is_some()
    }
}
