use super::*;

/// Cooperates until betrayed once, then defects against that opponent forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grudger;

impl Strategy for Grudger {
    fn choose(&mut self, _: &[Action], theirs: &[Action]) -> Action {
        if theirs.contains(&Action::Defect) {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
    fn label(&self) -> &'static str {
        "G"
    }
    fn description(&self) -> &'static str {
        "Cooperates until the opponent defects, then defects for the rest of the game."
    }
}
