use std::io::{self, BufRead, Write};

use colored::Colorize;

use wumpus_core::{GameConfig, GameError, GameHost, Response};

use crate::render;

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let config = GameConfig::default().with_optional_seed(seed);
    let mut host = GameHost::new(&config);

    print!("{}", render::banner());
    let view = host
        .start()
        .map_err(|e| format!("failed to start hunt: {e}"))?;
    println!("{}{}\n", render::intro(&view), render::room(&view));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match host.process(input) {
            Ok(Response::Quit) => break,
            Ok(response) => println!("{}\n", render::response(&response)),
            Err(GameError::SessionAlreadyActive) => {
                if confirm_quit(&mut reader)? {
                    break;
                }
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}

/// Ask whether to leave a running hunt. EOF counts as yes.
fn confirm_quit(reader: &mut impl BufRead) -> Result<bool, String> {
    print!("Would you like to quit? [y/n] ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut answer = String::new();
    let read = reader.read_line(&mut answer).map_err(|e| e.to_string())?;
    Ok(read == 0 || answer.trim().eq_ignore_ascii_case("y"))
}
