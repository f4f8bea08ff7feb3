//! Core types for Delve: rooms, rewards, the participant, and progression.
//!
//! A [`Dungeon`] is an ordered, validated sequence of [`Room`]s loaded from
//! JSON. A [`Progression`] walks that sequence with a single cursor, resolving
//! dice rolls against each room's difficulty and collecting rewards into the
//! [`Participant`]'s bonuses.

/// Player commands accepted at the obstacle prompt.
pub mod command;
/// Room sequences and their validation.
pub mod dungeon;
/// Error types used throughout the crate.
pub mod error;
/// The single participant of a run.
pub mod participant;
/// The room-progression state machine.
pub mod progression;
/// Rooms and rewards.
pub mod room;

/// Re-export command parsing.
pub use command::{Command, parse_command};
/// Re-export dungeon types.
pub use dungeon::Dungeon;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export participant state.
pub use participant::Participant;
/// Re-export progression types.
pub use progression::{BASE_ROLL_CEILING, Progression, Resolution, Step};
/// Re-export room types.
pub use room::{Reward, Room};
