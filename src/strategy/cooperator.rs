use super::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct Cooperator;

impl Strategy for Cooperator {
    fn choose(&mut self, _: &[Action], _: &[Action]) -> Action {
        Action::Cooperate
    }
    fn label(&self) -> &'static str {
        "C"
    }
    fn description(&self) -> &'static str {
        "Always cooperates."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action::*;

    #[test]
    fn ignores_history() {
        assert_eq!(Cooperator.choose(&[], &[]), Cooperate);
        assert_eq!(Cooperator.choose(&[Defect], &[Defect]), Cooperate);
        // mismatched lengths never happen in play; the rule still holds
        assert_eq!(Cooperator.choose(&[], &[Defect, Defect, Defect]), Cooperate);
    }
}
