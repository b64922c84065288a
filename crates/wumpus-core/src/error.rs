//! Error types for the game engine.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing.
///
/// None of these are fatal: every variant leaves the game state untouched and
/// the caller may simply try another action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Move target is not one of the current room's tunnels.
    #[error("there is no tunnel to '{0}' from here")]
    InvalidTarget(String),

    /// An action was attempted with no hunt in progress.
    #[error("no hunt is in progress, type 'new' to start one")]
    NoActiveSession,

    /// A new hunt was requested while one is still running.
    #[error("a hunt is already in progress")]
    SessionAlreadyActive,

    /// A move or shot was attempted after the hunt ended.
    #[error("the hunt is over, type 'new' to start another")]
    PostGameAction,

    /// Input did not parse as a command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command that needs a cavern id was given none.
    #[error("{0} where? give a cavern id")]
    MissingTarget(&'static str),
}

impl GameError {
    /// Whether this error is a conflict over session ownership.
    pub fn is_session_conflict(&self) -> bool {
        matches!(self, Self::NoActiveSession | Self::SessionAlreadyActive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_conflicts() {
        assert!(GameError::NoActiveSession.is_session_conflict());
        assert!(GameError::SessionAlreadyActive.is_session_conflict());
        assert!(!GameError::PostGameAction.is_session_conflict());
        assert!(!GameError::InvalidTarget("abcd".into()).is_session_conflict());
    }

    #[test]
    fn messages_name_the_target() {
        let err = GameError::InvalidTarget("qwer".into());
        assert_eq!(err.to_string(), "there is no tunnel to 'qwer' from here");
        assert_eq!(
            GameError::MissingTarget("shoot").to_string(),
            "shoot where? give a cavern id"
        );
    }
}
