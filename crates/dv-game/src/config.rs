//! Configuration for a game run.

/// Options that change how a run is presented.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Show the room narrative before every prompt instead of only on entry.
    pub repeat_narrative: bool,
}

impl GameConfig {
    /// Set whether the room narrative repeats before every prompt.
    pub fn with_repeat_narrative(mut self, repeat: bool) -> Self {
        self.repeat_narrative = repeat;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert!(!GameConfig::default().repeat_narrative);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default().with_repeat_narrative(true);
        assert!(cfg.repeat_narrative);
    }
}
