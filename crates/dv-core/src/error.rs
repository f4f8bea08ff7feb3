use dv_mechanics::MechError;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading content or advancing a run.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The room sequence has no rooms.
    #[error("dungeon has no rooms")]
    EmptyDungeon,

    /// A room's difficulty is below 1.
    #[error("room {index} has invalid difficulty {difficulty} (must be at least 1)")]
    InvalidDifficulty {
        /// Position of the room in the sequence.
        index: usize,
        /// The offending difficulty.
        difficulty: i32,
    },

    /// No roll can ever clear this room given the bonuses collected before it.
    #[error("room {index} cannot be cleared: difficulty {difficulty}, best possible roll {best_roll}")]
    UnwinnableRoom {
        /// Position of the room in the sequence.
        index: usize,
        /// The room's difficulty.
        difficulty: i32,
        /// Highest outcome the roll range allows on entry.
        best_roll: i32,
    },

    /// Collecting this room's bonus would push the roll ceiling outside `i32`.
    #[error("room {index} has a bonus that overflows the roll range")]
    BonusOverflow {
        /// Position of the room in the sequence.
        index: usize,
    },

    /// Every room has been cleared; there is nothing left to resolve.
    #[error("the run is already complete")]
    AlreadyComplete,

    /// Room content could not be deserialized.
    #[error("invalid room content: {0}")]
    InvalidContent(#[from] serde_json::Error),

    /// The roll source rejected a request.
    #[error("{0}")]
    Mechanics(#[from] MechError),
}
