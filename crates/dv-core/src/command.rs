//! Command parsing for the obstacle prompt.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Attempt to clear the current room.
    Roll,
    /// Reserved for guidance text; currently does nothing.
    Help,
    /// Anything else.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Parse a line of player input into a command.
///
/// Matching ignores surrounding whitespace and letter case.
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "roll" => Command::Roll,
        "help" => Command::Help,
        _ => Command::Unknown {
            input: trimmed.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roll() {
        assert_eq!(parse_command("roll"), Command::Roll);
        assert_eq!(parse_command("  ROLL \n"), Command::Roll);
    }

    #[test]
    fn parse_help() {
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("Help"), Command::Help);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_command(" foo "),
            Command::Unknown {
                input: "foo".to_string()
            }
        );
        assert_eq!(
            parse_command("roll twice"),
            Command::Unknown {
                input: "roll twice".to_string()
            }
        );
    }
}
