//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into storage `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.
//!
//! Vehicles, people, and calls are numbered from 1 — id 0 never occurs in a
//! run, and `INVALID` (`u32::MAX`) marks "no id".  Floors are numbered from 0
//! (the lobby).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A car in the fleet.  Numbered from 1 in fleet order.
    pub struct VehicleId(u32);
}

typed_id! {
    /// A passenger.  Numbered from 1 in spawn order.
    pub struct PersonId(u32);
}

typed_id! {
    /// A transport call (one origin→destination request).  Numbered from 1.
    pub struct CallId(u32);
}

typed_id! {
    /// A floor of the building.  Floor 0 is the lobby.
    pub struct FloorId(u32);
}

impl FloorId {
    /// The lobby — every building has one, at index 0.
    pub const LOBBY: FloorId = FloorId(0);

    /// The floor as a continuous position value.
    #[inline]
    pub fn as_position(self) -> f64 {
        self.0 as f64
    }

    /// Absolute floor distance to `other`.
    #[inline]
    pub fn distance_to(self, other: FloorId) -> u32 {
        self.0.abs_diff(other.0)
    }
}
