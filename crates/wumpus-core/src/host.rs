//! Single-session ownership and command dispatch.
//!
//! A `GameHost` holds at most one hunt. Starting another while one is still
//! running is a conflict the caller must resolve (for example by asking the
//! player), never a silent overwrite. A finished hunt stays around so that
//! late moves get a clear `PostGameAction` instead of `NoActiveSession`.

use log::debug;
use rand::rngs::StdRng;

use crate::cave::{CaveGraph, Room, RoomId};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::outcome::Outcome;
use crate::parser::{Command, parse_command};
use crate::session::GameSession;
use crate::traversal::{Entry, RoomView};

/// What the host did in answer to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A new hunt began in this cavern.
    Started(RoomView),
    /// The player is in this cavern (after a safe move or a look).
    Room(RoomView),
    /// The player walked into a hazard.
    Died {
        /// The fatal cavern.
        room: Room,
        /// The matching death.
        outcome: Outcome,
    },
    /// The bullet was fired.
    Shot(Outcome),
    /// Caverns the player may walk into.
    Tunnels(Vec<RoomId>),
    /// The player asked for help.
    Help,
    /// The player wants to leave.
    Quit,
}

impl Response {
    /// The outcome, if this response ended the hunt.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Died { outcome, .. } | Self::Shot(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Owner of the (at most one) current hunt.
pub struct GameHost {
    rng: StdRng,
    session: Option<GameSession>,
    hunts: u32,
}

impl GameHost {
    /// Create a host with no hunt in progress.
    pub fn new(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => debug!("host seeded with {seed}"),
            None => debug!("host seeded from the OS"),
        }
        Self {
            rng: config.rng(),
            session: None,
            hunts: 0,
        }
    }

    /// The current or most recently finished hunt.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Whether a hunt is running.
    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_active)
    }

    /// Number of hunts started by this host.
    pub fn hunts(&self) -> u32 {
        self.hunts
    }

    /// Start a hunt in a freshly generated cave.
    pub fn start(&mut self) -> GameResult<RoomView> {
        self.ensure_idle()?;
        let cave = CaveGraph::generate(&mut self.rng);
        Ok(self.begin(cave))
    }

    /// Start a hunt in a given cave.
    pub fn start_in(&mut self, cave: CaveGraph) -> GameResult<RoomView> {
        self.ensure_idle()?;
        Ok(self.begin(cave))
    }

    /// Drop the current hunt, running or not. Returns whether a running hunt
    /// was abandoned.
    pub fn abandon(&mut self) -> bool {
        let was_active = self.is_active();
        if was_active {
            debug!("abandoning running hunt");
        }
        self.session = None;
        was_active
    }

    /// Walk into a neighboring cavern of the running hunt.
    pub fn move_to(&mut self, target: &str) -> GameResult<Response> {
        let entry = self.session_mut()?.move_to(target)?;
        Ok(match entry {
            Entry::Safe(view) => Response::Room(view),
            Entry::Fatal { room, outcome } => Response::Died { room, outcome },
        })
    }

    /// Fire the bullet of the running hunt.
    pub fn shoot(&mut self, target: &str) -> GameResult<Response> {
        let outcome = self.session_mut()?.shoot(target)?;
        Ok(Response::Shot(outcome))
    }

    /// Parse and execute one line of player input.
    pub fn process(&mut self, input: &str) -> GameResult<Response> {
        self.execute(parse_command(input))
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> GameResult<Response> {
        match command {
            Command::Move { target } => self.move_to(&target),
            Command::Shoot { target } => self.shoot(&target),
            Command::Look => self.active_session().map(|s| Response::Room(s.view())),
            Command::Tunnels => self
                .active_session()
                .map(|s| Response::Tunnels(s.valid_targets().into_iter().cloned().collect())),
            Command::New => self.start().map(Response::Started),
            Command::Help => Ok(Response::Help),
            Command::Quit => Ok(Response::Quit),
            Command::Incomplete { verb } => Err(GameError::MissingTarget(verb)),
            Command::Unknown { input } => Err(GameError::UnknownCommand(input)),
        }
    }

    fn begin(&mut self, cave: CaveGraph) -> RoomView {
        let session = GameSession::new(cave);
        let view = session.view();
        self.session = Some(session);
        self.hunts += 1;
        view
    }

    fn ensure_idle(&self) -> GameResult<()> {
        if self.is_active() {
            debug!("refused to start a hunt while one is running");
            Err(GameError::SessionAlreadyActive)
        } else {
            Ok(())
        }
    }

    fn session_mut(&mut self) -> GameResult<&mut GameSession> {
        self.session.as_mut().ok_or(GameError::NoActiveSession)
    }

    fn active_session(&self) -> GameResult<&GameSession> {
        match &self.session {
            None => Err(GameError::NoActiveSession),
            Some(s) if !s.is_active() => Err(GameError::PostGameAction),
            Some(s) => Ok(s),
        }
    }
}
