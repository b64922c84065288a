//! Room labels: the two hazards and the eighteen cosmetic descriptions.

use serde::{Deserialize, Serialize};

/// The tag carried by a cavern.
///
/// Every cave uses each label exactly once, so there is always one wumpus and
/// one pit among the twenty rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomLabel {
    /// The monster's lair.
    Wumpus,
    /// A bottomless pit.
    Pit,
    /// Smelly.
    Smelly,
    /// Clean.
    Clean,
    /// Grimy.
    Grimy,
    /// Mucky.
    Mucky,
    /// Muddy.
    Muddy,
    /// Large.
    Large,
    /// Small.
    Small,
    /// Wide.
    Wide,
    /// Wet.
    Wet,
    /// Stuffy.
    Stuffy,
    /// Overgrown.
    Overgrown,
    /// Warm.
    Warm,
    /// Cold.
    Cold,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
}

impl RoomLabel {
    /// Every label, hazards first.
    pub const ALL: [RoomLabel; 20] = [
        Self::Wumpus,
        Self::Pit,
        Self::Smelly,
        Self::Clean,
        Self::Grimy,
        Self::Mucky,
        Self::Muddy,
        Self::Large,
        Self::Small,
        Self::Wide,
        Self::Wet,
        Self::Stuffy,
        Self::Overgrown,
        Self::Warm,
        Self::Cold,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
    ];

    /// Whether entering a room with this label ends the hunt.
    pub fn is_hazard(self) -> bool {
        matches!(self, Self::Wumpus | Self::Pit)
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wumpus => "wumpus",
            Self::Pit => "pit",
            Self::Smelly => "smelly",
            Self::Clean => "clean",
            Self::Grimy => "grimy",
            Self::Mucky => "mucky",
            Self::Muddy => "muddy",
            Self::Large => "large",
            Self::Small => "small",
            Self::Wide => "wide",
            Self::Wet => "wet",
            Self::Stuffy => "stuffy",
            Self::Overgrown => "overgrown",
            Self::Warm => "warm",
            Self::Cold => "cold",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        }
    }
}

impl std::fmt::Display for RoomLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
