//! Room progression.
//!
//! A single cursor walks the dungeon in order. The only transition that moves
//! it is a successful roll: the current room is marked cleared, its reward
//! bonus is appended to the participant, and the cursor advances by one. The
//! run is complete once the cursor equals the room count.

use dv_mechanics::RollSource;

use crate::command::Command;
use crate::dungeon::Dungeon;
use crate::error::{CoreError, CoreResult};
use crate::participant::Participant;
use crate::room::{Reward, Room};

/// Lowest possible roll outcome.
pub const ROLL_FLOOR: i32 = 1;

/// Exclusive roll ceiling before any bonuses are collected.
pub const BASE_ROLL_CEILING: i32 = 6;

/// The result of resolving one roll against the current room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome met the difficulty; the room is cleared.
    Cleared {
        /// Index of the room that was cleared.
        room: usize,
        /// The rolled value.
        outcome: i32,
        /// The reward that was claimed.
        reward: Reward,
    },
    /// The outcome fell short; nothing changed.
    Failed {
        /// Index of the current room.
        room: usize,
        /// The rolled value.
        outcome: i32,
        /// The difficulty that was missed.
        difficulty: i32,
    },
}

impl Resolution {
    /// The rolled value.
    pub fn outcome(&self) -> i32 {
        match self {
            Self::Cleared { outcome, .. } | Self::Failed { outcome, .. } => *outcome,
        }
    }
}

/// What a single command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A roll was made and resolved.
    Rolled(Resolution),
    /// Help was requested. No state change.
    Help,
    /// The command was not recognised. No state change.
    Rejected {
        /// The rejected input.
        input: String,
    },
}

/// A run through a dungeon by a single participant.
#[derive(Debug, Clone)]
pub struct Progression {
    dungeon: Dungeon,
    participant: Participant,
    cursor: usize,
}

impl Progression {
    /// Start a run at the first room.
    pub fn new(dungeon: Dungeon, participant: Participant) -> Self {
        Self {
            dungeon,
            participant,
            cursor: 0,
        }
    }

    /// Index of the current room. Equals the room count once complete.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The dungeon being played.
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// The participant.
    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    /// The room under the cursor, or `None` once the run is complete.
    pub fn current_room(&self) -> Option<&Room> {
        self.dungeon.rooms().get(self.cursor)
    }

    /// Whether every room has been cleared.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.dungeon.len()
    }

    /// Exclusive upper bound of the next roll: `6 + sum(bonuses)`.
    ///
    /// Dungeon validation keeps this within `i32` for every reachable cursor.
    pub fn roll_ceiling(&self) -> i32 {
        BASE_ROLL_CEILING + self.participant.bonus_total()
    }

    /// Resolve a roll outcome against the current room.
    pub fn resolve(&mut self, outcome: i32) -> CoreResult<Resolution> {
        let room_index = self.cursor;
        let room = self
            .dungeon
            .room_mut(room_index)
            .ok_or(CoreError::AlreadyComplete)?;
        let difficulty = room.difficulty();

        if outcome < difficulty {
            tracing::debug!(room = room_index, outcome, difficulty, "roll failed");
            return Ok(Resolution::Failed {
                room: room_index,
                outcome,
                difficulty,
            });
        }

        room.mark_cleared();
        let reward = room.reward().clone();
        self.participant.add_bonus(reward.bonus());
        self.cursor += 1;
        tracing::info!(
            room = room_index,
            outcome,
            difficulty,
            bonus = reward.bonus(),
            "room cleared"
        );

        Ok(Resolution::Cleared {
            room: room_index,
            outcome,
            reward,
        })
    }

    /// Roll over `[1, roll_ceiling())` and resolve the outcome.
    pub fn attempt(&mut self, roller: &mut impl RollSource) -> CoreResult<Resolution> {
        if self.is_complete() {
            return Err(CoreError::AlreadyComplete);
        }
        let outcome = roller.roll(ROLL_FLOOR, self.roll_ceiling())?;
        self.resolve(outcome)
    }

    /// Apply a player command.
    pub fn apply(&mut self, command: &Command, roller: &mut impl RollSource) -> CoreResult<Step> {
        if self.is_complete() {
            return Err(CoreError::AlreadyComplete);
        }
        match command {
            Command::Roll => self.attempt(roller).map(Step::Rolled),
            Command::Help => Ok(Step::Help),
            Command::Unknown { input } => {
                tracing::debug!(%input, "unknown command");
                Ok(Step::Rejected {
                    input: input.clone(),
                })
            }
        }
    }
}
