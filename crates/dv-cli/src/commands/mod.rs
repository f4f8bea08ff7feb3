pub mod check;
pub mod play;
pub mod rooms;

use std::path::Path;

use dv_core::Dungeon;

/// Load a room file, or the built-in dungeon when no path is given.
fn load_dungeon(path: Option<&Path>) -> Result<Dungeon, String> {
    let Some(path) = path else {
        return Dungeon::builtin().map_err(|e| format!("built-in dungeon is invalid: {e}"));
    };

    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
    Dungeon::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}
