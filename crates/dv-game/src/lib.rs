//! Interactive game loop for Delve.
//!
//! [`Game`] greets the player through a typed input [`Gateway`], then walks a
//! [`Dungeon`] room by room, turning each line of input into a command for the
//! progression engine until every room is cleared.
//!
//! [`Gateway`]: dv_prompt::Gateway
//! [`Dungeon`]: dv_core::Dungeon

pub mod config;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::Game;
