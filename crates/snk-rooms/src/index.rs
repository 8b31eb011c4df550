//! Floor → rooms grouping built once from the room directory.
//!
//! # Ordering
//!
//! Floors appear in the order they were first seen in the input, and rooms
//! keep their input order within a floor. Nothing is sorted: given
//! `[{2,"201"}, {1,"101"}, {2,"202"}]` the index is
//! `[(2, ["201", "202"]), (1, ["101"])]`.
//!
//! The index is a one-shot transform of a single fetch result; there is no
//! incremental add/remove API.

use serde::Serialize;
use snk_schemas::{Floor, Room};

/// All rooms on one floor, in directory order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FloorGroup {
    pub floor: Floor,
    pub rooms: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoomIndex {
    groups: Vec<FloorGroup>,
}

impl RoomIndex {
    /// Group `rooms` by floor, preserving discovery and in-group order.
    pub fn build(rooms: &[Room]) -> Self {
        let mut groups: Vec<FloorGroup> = Vec::new();
        for room in rooms {
            match groups.iter_mut().find(|g| g.floor == room.floor) {
                Some(g) => g.rooms.push(room.number_string.clone()),
                None => groups.push(FloorGroup {
                    floor: room.floor,
                    rooms: vec![room.number_string.clone()],
                }),
            }
        }
        Self { groups }
    }

    pub fn groups(&self) -> &[FloorGroup] {
        &self.groups
    }

    /// Floors in discovery order.
    pub fn floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.groups.iter().map(|g| g.floor)
    }

    /// Rooms on `floor`, or `None` if the floor is not in the directory.
    pub fn rooms_on(&self, floor: Floor) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.floor == floor)
            .map(|g| g.rooms.as_slice())
    }

    pub fn has_floor(&self, floor: Floor) -> bool {
        self.rooms_on(floor).is_some()
    }

    /// `true` if `room` is listed under `floor`.
    pub fn contains(&self, floor: Floor, room: &str) -> bool {
        self.rooms_on(floor)
            .map(|rooms| rooms.iter().any(|r| r == room))
            .unwrap_or(false)
    }

    pub fn floor_count(&self) -> usize {
        self.groups.len()
    }

    pub fn room_count(&self) -> usize {
        self.groups.iter().map(|g| g.rooms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
