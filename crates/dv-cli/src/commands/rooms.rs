use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(rooms: Option<&Path>) -> Result<(), String> {
    let dungeon = super::load_dungeon(rooms)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Difficulty", "Best roll", "Reward", "Bonus"]);

    for (index, (room, ceiling)) in dungeon.entry_ceilings().enumerate() {
        let reward = room.reward();
        table.add_row(vec![
            (index + 1).to_string(),
            room.difficulty().to_string(),
            (ceiling - 1).to_string(),
            reward.description().to_string(),
            format!("{:+}", reward.bonus()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", dungeon.len());

    Ok(())
}
