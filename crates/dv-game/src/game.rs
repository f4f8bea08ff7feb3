//! The game loop.

use std::io::{BufRead, Write};

use dv_core::{Dungeon, Participant, Progression, Resolution, Step, parse_command};
use dv_mechanics::RollSource;
use dv_prompt::Gateway;

use crate::config::GameConfig;
use crate::error::GameResult;

/// Asked once, before the first room.
pub const NAME_PROMPT: &str = "What is your name, traveler?";

/// Asked before every command.
pub const ACTION_PROMPT: &str = "What is your action?";

/// Sent for any command other than `help` or `roll`.
pub const USAGE_HINT: &str = "Please input an action, help or roll.";

/// The completion line for a participant.
pub fn completion_message(name: &str) -> String {
    format!("Congratulations on completing the dungeon, {name}!")
}

/// A single-player run over a typed input gateway.
pub struct Game<R, W, D> {
    gateway: Gateway<R, W>,
    roller: D,
    config: GameConfig,
}

impl<R: BufRead, W: Write, D: RollSource> Game<R, W, D> {
    /// Create a game.
    pub fn new(gateway: Gateway<R, W>, roller: D, config: GameConfig) -> Self {
        Self {
            gateway,
            roller,
            config,
        }
    }

    /// Greet the player, then play `dungeon` to completion.
    ///
    /// Returns the finished progression.
    pub fn play(&mut self, dungeon: Dungeon) -> GameResult<Progression> {
        let participant = self.welcome()?;
        let mut progression = Progression::new(dungeon, participant);
        self.run(&mut progression)?;
        Ok(progression)
    }

    /// Ask for the player's name.
    pub fn welcome(&mut self) -> GameResult<Participant> {
        let name: String = self.gateway.request(NAME_PROMPT)?;
        let name = name.trim();
        tracing::info!(participant = name, "participant joined");
        self.gateway.send(&format!("Welcome, {name}."))?;
        Ok(Participant::new(name))
    }

    /// Accept commands until every room in `progression` is cleared.
    pub fn run(&mut self, progression: &mut Progression) -> GameResult<()> {
        let mut shown = None;

        while let Some(room) = progression.current_room() {
            let cursor = progression.cursor();
            if self.config.repeat_narrative || shown != Some(cursor) {
                self.gateway.send("")?;
                self.gateway.send(room.narrative())?;
                self.gateway.send(room.obstacle())?;
                shown = Some(cursor);
            }

            let input: String = self.gateway.request(ACTION_PROMPT)?;
            let command = parse_command(&input);

            match progression.apply(&command, &mut self.roller)? {
                Step::Rolled(resolution) => {
                    self.gateway
                        .send(&format!("You rolled: {}", resolution.outcome()))?;
                    if let Resolution::Cleared { reward, .. } = resolution {
                        self.gateway
                            .send(&format!("You get: {}", reward.description()))?;
                    }
                }
                Step::Help => {}
                Step::Rejected { .. } => self.gateway.send(USAGE_HINT)?,
            }
        }

        let name = progression.participant().name();
        tracing::info!(
            participant = name,
            bonuses = ?progression.participant().bonuses(),
            "dungeon complete"
        );
        self.gateway.send("")?;
        self.gateway.send(&completion_message(name))?;
        Ok(())
    }

    /// Take the gateway back.
    pub fn into_gateway(self) -> Gateway<R, W> {
        self.gateway
    }
}
