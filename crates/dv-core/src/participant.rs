/// The player's in-run state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    bonuses: Vec<i32>,
}

impl Participant {
    /// Create a participant with no bonuses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bonuses: Vec::new(),
        }
    }

    /// The participant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bonuses collected so far, in the order the rooms were cleared.
    pub fn bonuses(&self) -> &[i32] {
        &self.bonuses
    }

    /// Sum of all collected bonuses.
    pub fn bonus_total(&self) -> i32 {
        self.bonuses.iter().sum()
    }

    pub(crate) fn add_bonus(&mut self, bonus: i32) {
        self.bonuses.push(bonus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_participant_has_no_bonuses() {
        let p = Participant::new("Ada");
        assert_eq!(p.name(), "Ada");
        assert!(p.bonuses().is_empty());
        assert_eq!(p.bonus_total(), 0);
    }

    #[test]
    fn bonuses_append_in_order() {
        let mut p = Participant::new("Ada");
        p.add_bonus(2);
        p.add_bonus(-1);
        p.add_bonus(2);
        assert_eq!(p.bonuses(), &[2, -1, 2]);
        assert_eq!(p.bonus_total(), 3);
    }
}
