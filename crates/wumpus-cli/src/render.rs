//! Text rendering for the terminal.

use colored::Colorize;

use wumpus_core::{Outcome, Response, Room, RoomId, RoomView};

pub fn banner() -> String {
    format!(
        r#"
        Hunt the
        _  _  _   _     _   _______    _____    _     _   _________
        |  |  |   |     |   |  |  |   |_____]   |     |   |______
        |__|__|   |_____|   |  |  |   |         |_____|   ______|


   Welcome to Hunt the Wumpus! Type {} for the rules, {} to leave.
"#,
        "help".bold(),
        "quit".bold()
    )
}

pub fn intro(view: &RoomView) -> String {
    format!(
        "\n   You are deep in the Caves of Closure, hunting the mysterious Wumpus.\n   \
         You have a gun ({}) with one bullet. Use it well.\n\n   \
         You climb down a ladder into cavern {}.\n",
        "shoot <cavern>".bold(),
        view.id.as_str().bold()
    )
}

pub fn room(view: &RoomView) -> String {
    let mut out = format!("\n   You have entered a {} chamber.", view.label);
    if view.cues.blood {
        out.push_str(&format!(" There is {}.", "blood on the walls".red().bold()));
    }
    if view.cues.breeze {
        out.push_str(&format!(" You feel a {}.", "breeze".blue().bold()));
    }
    out.push_str(&format!(
        "\n\n   There are tunnels to {}.",
        tunnel_list(&view.tunnels)
    ));
    out
}

pub fn hazard(room: &Room) -> String {
    format!(
        "\n   You have entered a chamber with a {} in it.",
        room.label
    )
}

pub fn game_over(outcome: Outcome) -> String {
    let message = match outcome {
        Outcome::Devoured => outcome.message().red().bold(),
        Outcome::KilledWumpus => outcome.message().green().bold(),
        _ => outcome.message().bold(),
    };
    format!(
        "\n   {message}\n\n   If you would like to play again, type {}.",
        "new".bold()
    )
}

pub fn help() -> String {
    "\
   Commands:
     <cavern>            Walk through the tunnel to a neighboring cavern
     go <cavern>         Same as above
     shoot <cavern>      Fire your only bullet into any cavern
     look                Describe the current cavern again
     tunnels             List the caverns you can walk into
     new                 Start a new hunt
     help                Show this help
     quit                Leave the caves

   Blood on the walls means the Wumpus is one tunnel away.
   A breeze means the pit is one tunnel away."
        .to_string()
}

pub fn response(response: &Response) -> String {
    match response {
        Response::Started(view) => format!("{}{}", intro(view), room(view)),
        Response::Room(view) => room(view),
        Response::Died { room, outcome } => format!("{}\n{}", hazard(room), game_over(*outcome)),
        Response::Shot(outcome) => game_over(*outcome),
        Response::Tunnels(ids) => format!("\n   There are tunnels to {}.", tunnel_list(ids)),
        Response::Help => help(),
        Response::Quit => String::new(),
    }
}

/// `a, b, c, and d`
fn tunnel_list(ids: &[RoomId]) -> String {
    let names: Vec<String> = ids.iter().map(|id| id.as_str().bold().to_string()).collect();
    match names.split_last() {
        None => "nowhere".to_string(),
        Some((only, [])) => only.clone(),
        Some((last, rest)) => format!("{}, and {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_core::{Cues, RoomLabel};

    fn id(s: &str) -> RoomId {
        RoomId::new(s).unwrap()
    }

    fn view(cues: Cues) -> RoomView {
        RoomView {
            index: 0,
            id: id("abcd"),
            label: RoomLabel::Muddy,
            cues,
            tunnels: [id("bcde"), id("cdef"), id("defg"), id("efgh")],
        }
    }

    #[test]
    fn room_text_lists_tunnels() {
        colored::control::set_override(false);
        let text = room(&view(Cues::default()));
        assert!(text.contains("You have entered a muddy chamber."));
        assert!(text.contains("There are tunnels to bcde, cdef, defg, and efgh."));
        assert!(!text.contains("blood"));
        assert!(!text.contains("breeze"));
    }

    #[test]
    fn room_text_shows_cues() {
        colored::control::set_override(false);
        let text = room(&view(Cues {
            blood: true,
            breeze: true,
        }));
        assert!(text.contains("There is blood on the walls."));
        assert!(text.contains("You feel a breeze."));
    }

    #[test]
    fn hazard_and_outcome_text() {
        colored::control::set_override(false);
        let pit = Room {
            id: id("abcd"),
            label: RoomLabel::Pit,
        };
        let text = response(&Response::Died {
            room: pit,
            outcome: Outcome::FellIntoPit,
        });
        assert!(text.contains("a chamber with a pit in it"));
        assert!(text.contains("You have fallen into a pit"));
        assert!(text.contains("play again"));
    }

    #[test]
    fn short_tunnel_lists() {
        colored::control::set_override(false);
        assert_eq!(tunnel_list(&[]), "nowhere");
        assert_eq!(tunnel_list(&[id("abcd")]), "abcd");
        assert_eq!(tunnel_list(&[id("abcd"), id("bcde")]), "abcd, and bcde");
    }
}
