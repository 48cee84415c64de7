use crate::Action;

/// One agent's view of every round against a single opponent.
///
/// Both sequences grow together and are never rewritten: `mine()[k]` and
/// `theirs()[k]` are the two simultaneous moves of round `k`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    mine: Vec<Action>,
    theirs: Vec<Action>,
}

impl Record {
    /// Appends one round.
    pub fn push(&mut self, mine: Action, theirs: Action) {
        self.mine.push(mine);
        self.theirs.push(theirs);
    }
    /// Our own moves, oldest first.
    pub fn mine(&self) -> &[Action] {
        &self.mine
    }
    /// The opponent's moves as we observed them, oldest first.
    pub fn theirs(&self) -> &[Action] {
        &self.theirs
    }
    /// Rounds played.
    pub fn len(&self) -> usize {
        self.mine.len()
    }
    pub fn is_empty(&self) -> bool {
        self.mine.is_empty()
    }
    /// (ours, theirs) per round, oldest first.
    pub fn rounds(&self) -> impl Iterator<Item = (Action, Action)> + '_ {
        self.mine.iter().copied().zip(self.theirs.iter().copied())
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (mine, theirs) in self.rounds() {
            write!(f, "{}{} ", mine, theirs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action::*;

    #[test]
    fn grows_in_lockstep() {
        let mut record = Record::default();
        assert!(record.is_empty());
        record.push(Cooperate, Defect);
        record.push(Defect, Defect);
        assert_eq!(record.len(), 2);
        assert_eq!(record.mine(), &[Cooperate, Defect]);
        assert_eq!(record.theirs(), &[Defect, Defect]);
        assert_eq!(
            record.rounds().collect::<Vec<_>>(),
            vec![(Cooperate, Defect), (Defect, Defect)]
        );
    }
}
