//! Travel direction shared across all `lift-*` crates.
//!
//! One representation is used everywhere in the simulator; the legacy
//! integer encoding (0 = idle, 1 = up, 2 = down) survives only at the wire
//! boundary via [`Direction::to_code`].

use crate::FloorId;

/// Vertical travel direction of a car or a call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Not travelling (default state).
    #[default]
    Idle,
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `origin` to `destination`.
    ///
    /// Returns `Idle` for a same-floor pair; transport calls never carry it.
    #[inline]
    pub fn of_travel(origin: FloorId, destination: FloorId) -> Direction {
        use std::cmp::Ordering;
        match destination.0.cmp(&origin.0) {
            Ordering::Greater => Direction::Up,
            Ordering::Less    => Direction::Down,
            Ordering::Equal   => Direction::Idle,
        }
    }

    /// Wire encoding: 0 = idle, 1 = up, 2 = down.
    #[inline]
    pub fn to_code(self) -> u8 {
        match self {
            Direction::Idle => 0,
            Direction::Up   => 1,
            Direction::Down => 2,
        }
    }

    /// Human-readable label, used in record payloads and summaries.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Idle => "Idle",
            Direction::Up   => "Up",
            Direction::Down => "Down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
