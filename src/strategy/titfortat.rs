use super::*;

/// Cooperates first, then repeats whatever the opponent just did.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn choose(&mut self, _: &[Action], theirs: &[Action]) -> Action {
        theirs.last().copied().unwrap_or(Action::Cooperate)
    }
    fn label(&self) -> &'static str {
        "TFT"
    }
    fn description(&self) -> &'static str {
        "Cooperates on the first move, then mimics the opponent's previous move."
    }
}
