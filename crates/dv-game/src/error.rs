//! Error types for the game loop.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that end a run early.
#[derive(Debug, Error)]
pub enum GameError {
    /// Input or output failed.
    #[error("{0}")]
    Prompt(#[from] dv_prompt::PromptError),

    /// The progression engine rejected an action.
    #[error("{0}")]
    Core(#[from] dv_core::CoreError),
}
