//! Passenger population types.
//!
//! Each type has its own diurnal arrival curve, destination span, and stay
//! distribution; those live in `lift-arrivals` and `lift-control`.  This enum
//! only identifies the type.

/// The population segment a passenger belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonType {
    /// Lives in the building; travels in the morning and evening.
    Resident,
    /// Commutes in around office opening and leaves after a work day.
    OfficeWorker,
    /// Short midday visits to the lower commercial floors.
    Shopper,
}

impl PersonType {
    /// All types, in the fixed order the passenger controller iterates them.
    /// The order is part of the determinism contract.
    pub const ALL: [PersonType; 3] = [
        PersonType::Resident,
        PersonType::OfficeWorker,
        PersonType::Shopper,
    ];

    /// Human-readable label, used in record payloads and summaries.
    pub fn as_str(self) -> &'static str {
        match self {
            PersonType::Resident     => "Resident",
            PersonType::OfficeWorker => "OfficeWorker",
            PersonType::Shopper      => "Shopper",
        }
    }
}

impl std::fmt::Display for PersonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a passenger is in their journey.
///
/// Transitions are forward-only:
/// `NotSpawned → Waiting → Riding → (Staying → Waiting → Riding)* → Completed`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonState {
    /// Generated but not yet in the building.
    #[default]
    NotSpawned,
    /// Standing in a floor queue.
    Waiting,
    /// On board a car.
    Riding,
    /// At a destination floor, waiting out the planned stay.
    Staying,
    /// Journey finished; no further calls will be made.
    Completed,
}

impl PersonState {
    /// Human-readable label, used in record payloads and summaries.
    pub fn as_str(self) -> &'static str {
        match self {
            PersonState::NotSpawned => "NotSpawned",
            PersonState::Waiting    => "Waiting",
            PersonState::Riding     => "Riding",
            PersonState::Staying    => "Staying",
            PersonState::Completed  => "Completed",
        }
    }
}

impl std::fmt::Display for PersonState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
