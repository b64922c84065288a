//! Command parsing for player input.
//!
//! Every verb listed here is reserved: cave generation never hands out a
//! cavern id that collides with one, so a bare id is always a move.

use crate::cave::ROOM_ID_LEN;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Walk through a tunnel into a neighboring cavern.
    Move {
        /// The cavern id.
        target: String,
    },
    /// Fire the only bullet into a cavern.
    Shoot {
        /// The cavern id.
        target: String,
    },
    /// Describe the current cavern again.
    Look,
    /// List the caverns reachable from here.
    Tunnels,
    /// Start a new hunt.
    New,
    /// Show help.
    Help,
    /// Leave the game.
    Quit,
    /// A verb that needs a cavern id was given none.
    Incomplete {
        /// The verb as the player should see it.
        verb: &'static str,
    },
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

const MOVE_VERBS: &[&str] = &["go", "move", "walk", "enter", "climb"];
const SHOOT_VERBS: &[&str] = &["shoot", "fire"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const TUNNEL_VERBS: &[&str] = &["tunnels", "exits"];
const NEW_VERBS: &[&str] = &["new", "hunt", "restart"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

const ALL_VERBS: &[&[&str]] = &[
    MOVE_VERBS,
    SHOOT_VERBS,
    LOOK_VERBS,
    TUNNEL_VERBS,
    NEW_VERBS,
    HELP_VERBS,
    QUIT_VERBS,
];

/// Whether `word` belongs to the command vocabulary.
pub fn is_reserved(word: &str) -> bool {
    let word = word.to_lowercase();
    ALL_VERBS.iter().any(|verbs| verbs.contains(&word.as_str()))
}

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = &words[1..];

    if MOVE_VERBS.contains(&verb.as_str()) {
        return match rest.first() {
            Some(target) => Command::Move {
                target: target.to_lowercase(),
            },
            None => Command::Incomplete { verb: "go" },
        };
    }
    if SHOOT_VERBS.contains(&verb.as_str()) {
        return match rest.first() {
            Some(target) => Command::Shoot {
                target: target.to_lowercase(),
            },
            None => Command::Incomplete { verb: "shoot" },
        };
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return Command::Look;
    }
    if TUNNEL_VERBS.contains(&verb.as_str()) {
        return Command::Tunnels;
    }
    if NEW_VERBS.contains(&verb.as_str()) {
        return Command::New;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Command::Quit;
    }

    // A lone cavern id is a move, like typing the tunnel's name
    if words.len() == 1 && looks_like_room_id(&verb) {
        return Command::Move { target: verb };
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn looks_like_room_id(word: &str) -> bool {
    word.len() == ROOM_ID_LEN && word.chars().all(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_moves() {
        assert_eq!(
            parse_command("abcd"),
            Command::Move {
                target: "abcd".into()
            }
        );
        assert_eq!(
            parse_command("  XKCD "),
            Command::Move {
                target: "xkcd".into()
            }
        );
    }

    #[test]
    fn move_verbs() {
        for input in ["go abcd", "move abcd", "walk abcd", "enter ABCD"] {
            assert_eq!(
                parse_command(input),
                Command::Move {
                    target: "abcd".into()
                },
                "{input}"
            );
        }
    }

    #[test]
    fn shoot_verbs() {
        assert_eq!(
            parse_command("shoot qwer"),
            Command::Shoot {
                target: "qwer".into()
            }
        );
        assert_eq!(
            parse_command("fire nowhere-at-all"),
            Command::Shoot {
                target: "nowhere-at-all".into()
            }
        );
    }

    #[test]
    fn verbs_without_target() {
        assert_eq!(parse_command("shoot"), Command::Incomplete { verb: "shoot" });
        assert_eq!(parse_command("go"), Command::Incomplete { verb: "go" });
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command(""), Command::Look);
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("exits"), Command::Tunnels);
        assert_eq!(parse_command("new"), Command::New);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn unknown_input() {
        assert_eq!(
            parse_command("dance wildly"),
            Command::Unknown {
                input: "dance wildly".into()
            }
        );
        assert!(matches!(parse_command("abc"), Command::Unknown { .. }));
        assert!(matches!(parse_command("ab1d"), Command::Unknown { .. }));
    }

    #[test]
    fn reserved_words() {
        assert!(is_reserved("look"));
        assert!(is_reserved("QUIT"));
        assert!(is_reserved("walk"));
        assert!(!is_reserved("abcd"));
    }
}
