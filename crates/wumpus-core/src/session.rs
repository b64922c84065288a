//! Per-hunt game state.
//!
//! A `GameSession` owns one cave and tracks where the player stands, whether
//! the bullet is still loaded, and whether the hunt has ended. Which caverns
//! can be walked into is always derived from the current index, never stored.

use log::{debug, info};

use crate::cave::{CaveGraph, RoomId, START_INDEX, neighbors};
use crate::error::{GameError, GameResult};
use crate::label::RoomLabel;
use crate::outcome::Outcome;
use crate::traversal::{self, Entry, RoomView};

/// Whether a hunt is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The player is alive and may move or shoot.
    Active,
    /// The hunt ended.
    Over(Outcome),
}

/// A single hunt through one cave.
#[derive(Debug, Clone)]
pub struct GameSession {
    cave: CaveGraph,
    current: usize,
    has_bullet: bool,
    status: SessionStatus,
    moves: u32,
}

impl GameSession {
    /// Start a hunt in `cave`, standing in the start cavern.
    ///
    /// Climbing down the ladder is the implicit first move. The start cavern
    /// is never a hazard, so the hunt always begins active.
    pub fn new(cave: CaveGraph) -> Self {
        info!("hunt started in cavern {}", cave.start().id);
        Self {
            cave,
            current: START_INDEX,
            has_bullet: true,
            status: SessionStatus::Active,
            moves: 0,
        }
    }

    /// The cave being explored.
    pub fn cave(&self) -> &CaveGraph {
        &self.cave
    }

    /// Index of the player's cavern.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Id of the player's cavern.
    pub fn current_id(&self) -> &RoomId {
        &self.cave.room(self.current).id
    }

    /// Whether the bullet has not been fired yet.
    pub fn has_bullet(&self) -> bool {
        self.has_bullet
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether the hunt is still running.
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// How the hunt ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            SessionStatus::Active => None,
            SessionStatus::Over(outcome) => Some(outcome),
        }
    }

    /// Number of tunnels walked through so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The player's cavern as seen from inside.
    pub fn view(&self) -> RoomView {
        traversal::describe(&self.cave, self.current)
    }

    /// Ids the player may walk into: the current cavern's four neighbors, or
    /// nothing once the hunt is over.
    pub fn valid_targets(&self) -> Vec<&RoomId> {
        if !self.is_active() {
            return Vec::new();
        }
        neighbors(self.current)
            .into_iter()
            .map(|n| &self.cave.room(n).id)
            .collect()
    }

    /// Walk into the neighboring cavern `target`.
    ///
    /// Fails with [`GameError::InvalidTarget`] if `target` is not a tunnel
    /// from here, leaving the player where they are.
    pub fn move_to(&mut self, target: &str) -> GameResult<Entry> {
        self.ensure_active()?;

        let Some(index) = neighbors(self.current)
            .into_iter()
            .find(|&n| self.cave.room(n).id == *target)
        else {
            debug!("rejected move to '{target}': not a tunnel from {}", self.current_id());
            return Err(GameError::InvalidTarget(target.to_string()));
        };

        self.moves += 1;
        let entry = traversal::enter(&self.cave, index);
        match &entry {
            Entry::Safe(view) => {
                debug!("moved to cavern {} (index {index})", view.id);
                self.current = index;
            }
            Entry::Fatal { outcome, .. } => self.finish(*outcome),
        }
        Ok(entry)
    }

    /// Fire the only bullet at `target`, which may be any cavern in the cave.
    ///
    /// Every shot ends the hunt: a hit on the wumpus wins, an id that names no
    /// cavern hits the wall, and anything else wastes the bullet.
    pub fn shoot(&mut self, target: &str) -> GameResult<Outcome> {
        self.ensure_active()?;

        self.has_bullet = false;
        let outcome = match self.cave.index_of(target) {
            None => Outcome::ShotWall,
            Some(index) if self.cave.room(index).label == RoomLabel::Wumpus => {
                Outcome::KilledWumpus
            }
            Some(_) => Outcome::WastedShot,
        };
        debug!("shot at '{target}'");
        self.finish(outcome);
        Ok(outcome)
    }

    fn ensure_active(&self) -> GameResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            debug!("rejected action after the hunt ended");
            Err(GameError::PostGameAction)
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!("hunt over after {} move(s): {outcome:?}", self.moves);
        self.status = SessionStatus::Over(outcome);
    }
}
