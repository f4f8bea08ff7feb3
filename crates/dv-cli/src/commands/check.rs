use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let dungeon = super::load_dungeon(Some(file))?;
    let total_bonus: i32 = dungeon.rooms().iter().map(|r| r.reward().bonus()).sum();

    println!("  All checks passed for '{}'.", file.display());
    println!("  {} rooms, total bonus {total_bonus}", dungeon.len());

    Ok(())
}
