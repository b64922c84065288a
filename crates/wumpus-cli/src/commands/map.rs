use comfy_table::{ContentArrangement, Table};
use serde_json::json;

use wumpus_core::{CaveGraph, GameConfig, neighbors};

pub fn run(seed: u64, as_json: bool) -> Result<(), String> {
    let mut rng = GameConfig::default().with_seed(seed).rng();
    let cave = CaveGraph::generate(&mut rng);

    if as_json {
        let rooms: Vec<_> = cave
            .rooms()
            .iter()
            .enumerate()
            .map(|(index, room)| {
                let tunnels: Vec<_> = neighbors(index)
                    .iter()
                    .map(|&n| cave.room(n).id.as_str())
                    .collect();
                json!({
                    "index": index,
                    "id": room.id,
                    "label": room.label,
                    "tunnels": tunnels,
                })
            })
            .collect();
        let doc = json!({
            "seed": seed,
            "start": cave.start().id,
            "rooms": rooms,
        });
        let out = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Cavern", "Label", "Tunnels"]);

    for (index, room) in cave.rooms().iter().enumerate() {
        let tunnels: Vec<_> = neighbors(index)
            .iter()
            .map(|&n| cave.room(n).id.to_string())
            .collect();
        let marker = if index == 0 {
            format!("{index} (start)")
        } else {
            index.to_string()
        };
        table.add_row(vec![
            marker,
            room.id.to_string(),
            room.label.to_string(),
            tunnels.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  seed {seed}, ladder leads to {}", cave.start().id);

    Ok(())
}
