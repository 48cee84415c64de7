use super::*;

/// Forgives a single defection; retaliates after two in a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitForTwoTats;

impl Strategy for TitForTwoTats {
    fn choose(&mut self, _: &[Action], theirs: &[Action]) -> Action {
        match theirs {
            [.., Action::Defect, Action::Defect] => Action::Defect,
            _ => Action::Cooperate,
        }
    }
    fn label(&self) -> &'static str {
        "TF2T"
    }
    fn description(&self) -> &'static str {
        "Cooperates until the opponent defects twice in a row, then defects."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action::*;

    fn choose(theirs: &[Action]) -> Action {
        let mine = vec![Cooperate; theirs.len()];
        TitForTwoTats.choose(&mine, theirs)
    }

    #[test]
    fn needs_two_consecutive_defections() {
        assert_eq!(choose(&[]), Cooperate);
        assert_eq!(choose(&[Defect]), Cooperate);
        assert_eq!(choose(&[Defect, Defect]), Defect);
        assert_eq!(choose(&[Cooperate, Defect]), Cooperate);
        assert_eq!(choose(&[Defect, Cooperate]), Cooperate);
    }

    #[test]
    fn only_the_latest_pair_matters() {
        assert_eq!(choose(&[Defect, Defect, Cooperate]), Cooperate);
        assert_eq!(choose(&[Cooperate, Cooperate, Defect, Defect]), Defect);
        assert_eq!(choose(&[Defect, Cooperate, Defect]), Cooperate);
    }
}
