//! Core engine for Hunt the Wumpus.
//!
//! Builds the hidden cave (twenty caverns on a fixed circulant graph with one
//! wumpus and one pit), walks the player through it one tunnel at a time,
//! derives the blood and breeze cues from neighboring hazards, and resolves the
//! single shot. Presentation lives in the CLI crate; everything here is
//! synchronous and deterministic for a given RNG seed.

/// Cave graph generation and topology.
pub mod cave;
/// Session configuration.
pub mod config;
/// Error types for the game engine.
pub mod error;
/// Single-session ownership and command dispatch.
pub mod host;
/// Room labels.
pub mod label;
/// Terminal outcomes of a hunt.
pub mod outcome;
/// Player command parsing.
pub mod parser;
/// Per-hunt game state.
pub mod session;
/// Room entry, cues and room views.
pub mod traversal;

pub use cave::{CaveGraph, ROOM_COUNT, Room, RoomId, neighbors};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use host::{GameHost, Response};
pub use label::RoomLabel;
pub use outcome::Outcome;
pub use parser::{Command, parse_command};
pub use session::{GameSession, SessionStatus};
pub use traversal::{Cues, Entry, RoomView};
