use super::*;
use crate::Action;
use crate::Points;
use crate::Strategy;
use std::collections::BTreeMap;

/// A named participant: its strategy plus everything it has seen.
///
/// Histories and score are written only by the scheduler while the run
/// is in progress, and read by reporting afterwards.
pub struct Agent {
    name: String,
    kind: String,
    strategy: Box<dyn Strategy>,
    records: BTreeMap<String, Record>,
    score: Points,
}

impl Agent {
    pub fn new(name: &str, kind: &str, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            strategy,
            records: BTreeMap::new(),
            score: 0,
        }
    }
    /// Unique name within a run; the key every opponent files us under.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Registry kind that built our strategy.
    pub fn kind(&self) -> &str {
        &self.kind
    }
    pub fn label(&self) -> &'static str {
        self.strategy.label()
    }
    pub fn description(&self) -> &'static str {
        self.strategy.description()
    }
    /// Sum of every payoff received so far.
    pub fn score(&self) -> Points {
        self.score
    }

    /// Next move against `opponent`, decided from prior rounds only.
    pub fn choose(&mut self, opponent: &str) -> Action {
        let (mine, theirs) = self
            .records
            .get(opponent)
            .map(|record| (record.mine(), record.theirs()))
            .unwrap_or_default();
        let action = self.strategy.choose(mine, theirs);
        log::trace!("{} chooses {:?} against {}", self.name, action, opponent);
        action
    }
    /// Records one round against `opponent`, starting a fresh record on first contact.
    pub fn update_history(&mut self, opponent: &str, action: Action, opponent_action: Action) {
        debug_assert!(opponent != self.name, "{} cannot play itself", self.name);
        self.records
            .entry(opponent.to_string())
            .or_default()
            .push(action, opponent_action);
    }
    /// Adds a payoff, saturating at the bounds of [`Points`].
    pub fn update_score(&mut self, payoff: Points) {
        self.score = self.score.saturating_add(payoff);
    }

    /// Everything we have seen against `opponent`, if we ever met.
    pub fn record(&self, opponent: &str) -> Option<&Record> {
        self.records.get(opponent)
    }
    /// Our own moves against `opponent`; empty if we never met.
    pub fn history(&self, opponent: &str) -> &[Action] {
        self.record(opponent).map(Record::mine).unwrap_or_default()
    }
    /// `opponent`'s moves against us; empty if we never met.
    pub fn opponent_history(&self, opponent: &str) -> &[Action] {
        self.record(opponent).map(Record::theirs).unwrap_or_default()
    }
    /// Names of everyone we have played, sorted.
    pub fn opponents(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
    /// Total rounds played against everyone.
    pub fn rounds(&self) -> usize {
        self.records.values().map(Record::len).sum()
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("score", &self.score)
            .field("records", &self.records)
            .finish()
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.label(), self.description())
    }
}
