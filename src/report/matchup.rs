use crate::Action;
use crate::Agent;
use crate::Payoffs;
use crate::Points;
use colored::Colorize;
use serde::Serialize;

/// One side of a pairing: its moves and its running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Side {
    pub name: String,
    pub label: String,
    pub actions: Vec<Action>,
    /// Cumulative payoff, starting with 0 before the first round,
    /// so it is one longer than `actions`.
    pub scores: Vec<Points>,
}

/// Full series between an ordered pair of agents.
///
/// Rebuilt from `left`'s retained history and the payoff model rather
/// than from any per-round result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matchup {
    pub left: Side,
    pub right: Side,
}

impl Matchup {
    /// `None` if the two never played.
    pub fn new(left: &Agent, right: &Agent, payoffs: &Payoffs) -> Option<Self> {
        let record = left.record(right.name())?;
        let mut l: Vec<Points> = vec![0];
        let mut r: Vec<Points> = vec![0];
        for (mine, theirs) in record.rounds() {
            let (p, q) = payoffs.payoffs(mine, theirs);
            l.push(l[l.len() - 1].saturating_add(p));
            r.push(r[r.len() - 1].saturating_add(q));
        }
        Some(Self {
            left: Side {
                name: left.name().to_string(),
                label: left.label().to_string(),
                actions: record.mine().to_vec(),
                scores: l,
            },
            right: Side {
                name: right.name().to_string(),
                label: right.label().to_string(),
                actions: record.theirs().to_vec(),
                scores: r,
            },
        })
    }
    pub fn rounds(&self) -> usize {
        self.left.actions.len()
    }
    /// File stem for artifacts describing this pairing.
    pub fn stem(&self) -> String {
        format!("{}_vs_{}", self.left.name, self.right.name).replace(['/', '\\'], "_")
    }
}

impl std::fmt::Display for Matchup {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = self.left.name.len().max(self.right.name.len());
        writeln!(
            f,
            "{} ({}) vs {} ({})",
            self.left.name.bold(),
            self.left.label,
            self.right.name.bold(),
            self.right.label
        )?;
        for (i, side) in [&self.left, &self.right].into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {:>width$} ", side.name, width = width)?;
            for action in side.actions.iter() {
                write!(f, "  {} ", action)?;
            }
            write!(f, "\n  {:>width$} ", "", width = width)?;
            for score in side.scores.iter().skip(1) {
                write!(f, "{:>4}", score)?;
            }
        }
        Ok(())
    }
}
