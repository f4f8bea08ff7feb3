use std::path::Path;

use colored::Colorize;

use dv_game::{Game, GameConfig};
use dv_mechanics::DiceRoller;
use dv_prompt::Gateway;

pub fn run(rooms: Option<&Path>, seed: Option<u64>, repeat_narrative: bool) -> Result<(), String> {
    let dungeon = super::load_dungeon(rooms)?;
    let roller = match seed {
        Some(seed) => DiceRoller::seeded(seed),
        None => DiceRoller::from_os(),
    };
    let config = GameConfig::default().with_repeat_narrative(repeat_narrative);
    tracing::debug!(?seed, rooms = dungeon.len(), repeat_narrative, "starting run");

    println!("  {} Delve", "Entering".bold());
    println!("  {} rooms stand between you and the exit.", dungeon.len());
    println!("  Type 'roll' to take on an obstacle.\n");

    let mut game = Game::new(Gateway::stdio(), roller, config);
    game.play(dungeon).map_err(|e| e.to_string())?;

    Ok(())
}
