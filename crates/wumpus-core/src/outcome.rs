//! Terminal outcomes of a hunt.

use serde::Serialize;

use crate::label::RoomLabel;

/// How a hunt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Walked into the wumpus's cavern.
    Devoured,
    /// Walked into the pit.
    FellIntoPit,
    /// Shot the wumpus.
    KilledWumpus,
    /// Shot at an id that is no cavern at all.
    ShotWall,
    /// Shot into a cavern without the wumpus.
    WastedShot,
}

impl Outcome {
    /// The death caused by entering a cavern with `label`, if any.
    pub fn from_hazard(label: RoomLabel) -> Option<Self> {
        match label {
            RoomLabel::Wumpus => Some(Self::Devoured),
            RoomLabel::Pit => Some(Self::FellIntoPit),
            _ => None,
        }
    }

    /// Whether the player won.
    pub fn is_victory(self) -> bool {
        self == Self::KilledWumpus
    }

    /// Whether the player died.
    pub fn is_death(self) -> bool {
        matches!(self, Self::Devoured | Self::FellIntoPit)
    }

    /// Human-readable game-over line.
    pub fn message(self) -> &'static str {
        match self {
            Self::Devoured => "The wumpus ate you",
            Self::FellIntoPit => "You have fallen into a pit",
            Self::KilledWumpus => "You shot the Wumpus!",
            Self::ShotWall => "You shot the wall!",
            Self::WastedShot => "You wasted your only bullet.",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
