//! Room entry, sensory cues and room views.
//!
//! Everything here is a pure function of the cave and an index; the session
//! owns the mutable part (where the player stands).

use serde::Serialize;

use crate::cave::{CaveGraph, Room, RoomId, neighbors};
use crate::label::RoomLabel;
use crate::outcome::Outcome;

/// Hints about hazards one tunnel away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cues {
    /// The wumpus is in a neighboring cavern.
    pub blood: bool,
    /// The pit is in a neighboring cavern.
    pub breeze: bool,
}

impl Cues {
    /// Cues felt in the cavern at `index`.
    pub fn around(cave: &CaveGraph, index: usize) -> Self {
        let labels = cave.neighbor_labels(index);
        Self {
            blood: labels.contains(&RoomLabel::Wumpus),
            breeze: labels.contains(&RoomLabel::Pit),
        }
    }

    /// True when nothing can be sensed.
    pub fn is_empty(&self) -> bool {
        !self.blood && !self.breeze
    }
}

/// What the player sees in a cavern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    /// Index in the cave.
    pub index: usize,
    /// The cavern's id.
    pub id: RoomId,
    /// The cavern's label.
    pub label: RoomLabel,
    /// Active cues.
    pub cues: Cues,
    /// Ids of the four neighboring caverns, in offset order.
    pub tunnels: [RoomId; 4],
}

/// Describe the cavern at `index`.
pub fn describe(cave: &CaveGraph, index: usize) -> RoomView {
    let room = cave.room(index);
    RoomView {
        index,
        id: room.id.clone(),
        label: room.label,
        cues: Cues::around(cave, index),
        tunnels: neighbors(index).map(|n| cave.room(n).id.clone()),
    }
}

/// The result of walking into a cavern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The cavern is safe; the hunt continues.
    Safe(RoomView),
    /// The cavern held a hazard.
    Fatal {
        /// The cavern entered.
        room: Room,
        /// The matching death.
        outcome: Outcome,
    },
}

impl Entry {
    /// The death, if this entry was fatal.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Safe(_) => None,
            Self::Fatal { outcome, .. } => Some(*outcome),
        }
    }
}

/// Resolve entering the cavern at `index`.
pub fn enter(cave: &CaveGraph, index: usize) -> Entry {
    let room = cave.room(index);
    match Outcome::from_hazard(room.label) {
        Some(outcome) => Entry::Fatal {
            room: room.clone(),
            outcome,
        },
        None => Entry::Safe(describe(cave, index)),
    }
}
