//! The `Building` — a bounds-checked ordered array of floors.

use lift_core::FloorId;

use crate::error::{BuildingError, BuildingResult};
use crate::floor::Floor;

/// An ordered sequence of floors.  Floor 0 is the lobby.
///
/// Floors are created with the building and never destroyed.
#[derive(Debug, Clone)]
pub struct Building {
    floors: Vec<Floor>,
}

impl Building {
    /// Build with `floor_count` floors.  Errors if `floor_count < 1`.
    pub fn new(floor_count: u32) -> BuildingResult<Self> {
        if floor_count < 1 {
            return Err(BuildingError::NoFloors);
        }
        let floors = (0..floor_count).map(|i| Floor::new(FloorId(i))).collect();
        Ok(Self { floors })
    }

    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.floors.len() as u32
    }

    /// The highest floor.
    #[inline]
    pub fn top_floor(&self) -> FloorId {
        FloorId(self.floor_count() - 1)
    }

    /// `true` if `floor` exists in this building.
    #[inline]
    pub fn contains(&self, floor: FloorId) -> bool {
        floor.index() < self.floors.len()
    }

    /// Bounds-checked shared access to one floor.
    pub fn floor(&self, floor: FloorId) -> BuildingResult<&Floor> {
        self.floors
            .get(floor.index())
            .ok_or(BuildingError::FloorOutOfRange(floor, self.floor_count()))
    }

    /// Bounds-checked mutable access to one floor.
    pub fn floor_mut(&mut self, floor: FloorId) -> BuildingResult<&mut Floor> {
        let count = self.floor_count();
        self.floors
            .get_mut(floor.index())
            .ok_or(BuildingError::FloorOutOfRange(floor, count))
    }

    /// Read-only iterator over all floors in ascending order.
    pub fn floors(&self) -> impl Iterator<Item = &Floor> {
        self.floors.iter()
    }

    /// Total passengers waiting in any queue, across all floors.
    pub fn total_waiting(&self) -> usize {
        self.floors
            .iter()
            .map(|f| f.waiting_up() + f.waiting_down())
            .sum()
    }
}
