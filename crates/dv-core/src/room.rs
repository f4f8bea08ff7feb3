use serde::{Deserialize, Serialize};

/// A bonus granted when a room is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    description: String,
    bonus: i32,
}

impl Reward {
    /// Create a reward.
    pub fn new(description: impl Into<String>, bonus: i32) -> Self {
        Self {
            description: description.into(),
            bonus,
        }
    }

    /// What the participant finds.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount added to every later roll ceiling. May be negative.
    pub fn bonus(&self) -> i32 {
        self.bonus
    }
}

/// A single gated stage of the dungeon.
///
/// Everything except the cleared flag is fixed at construction. The flag is
/// only flipped by [`Progression`](crate::Progression).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    narrative: String,
    obstacle: String,
    difficulty: i32,
    reward: Reward,
    #[serde(skip)]
    cleared: bool,
}

impl Room {
    /// Create an unresolved room.
    pub fn new(
        narrative: impl Into<String>,
        obstacle: impl Into<String>,
        difficulty: i32,
        reward: Reward,
    ) -> Self {
        Self {
            narrative: narrative.into(),
            obstacle: obstacle.into(),
            difficulty,
            reward,
            cleared: false,
        }
    }

    /// Text shown when the room becomes current.
    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    /// Text describing what stands in the way.
    pub fn obstacle(&self) -> &str {
        &self.obstacle
    }

    /// Minimum roll outcome that clears the room.
    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// The reward for clearing the room.
    pub fn reward(&self) -> &Reward {
        &self.reward
    }

    /// Whether the room has been cleared.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub(crate) fn mark_cleared(&mut self) {
        debug_assert!(!self.cleared, "room cleared twice");
        self.cleared = true;
    }
}
