use crate::Agent;
use crate::Outcome;
use crate::Payoffs;

/// Plays every unordered pair of agents once per round.
///
/// Holds no state of its own between calls; everything lives in the
/// agents. Iteration is fixed (outer loop rounds, inner loop pairs in
/// list order) so a configuration always replays identically. Calling
/// [`Scheduler::run`] twice on the same agents simply keeps appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    payoffs: Payoffs,
    rounds: usize,
}

impl Scheduler {
    pub fn new(payoffs: Payoffs, rounds: usize) -> Self {
        Self { payoffs, rounds }
    }
    pub fn payoffs(&self) -> &Payoffs {
        &self.payoffs
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    /// Index pairs `(i, j)` with `i < j`, in scheduling order.
    pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }
    /// Total `play` calls a full run over `n` agents makes.
    pub fn interactions(&self, n: usize) -> usize {
        self.rounds * n * n.saturating_sub(1) / 2
    }

    /// One simultaneous round between `a` and `b`.
    ///
    /// Both moves are decided before either history is touched, so neither
    /// side can see the other's current move regardless of call order.
    pub fn play(&self, a: &mut Agent, b: &mut Agent) -> Outcome {
        let x = a.choose(b.name());
        let y = b.choose(a.name());
        a.update_history(b.name(), x, y);
        b.update_history(a.name(), y, x);
        let outcome = Outcome::new(x, y, &self.payoffs);
        let (p, q) = outcome.payoffs();
        a.update_score(p);
        b.update_score(q);
        outcome
    }

    /// Plays the configured number of rounds; returns how many pairings were played.
    pub fn run(&self, agents: &mut [Agent]) -> usize {
        let mut played = 0;
        for round in 0..self.rounds {
            for (i, j) in Self::pairs(agents.len()) {
                let (a, b) = both(agents, i, j);
                let outcome = self.play(a, b);
                log::debug!("round {:>4} {:>12} v {:<12} {}", round, a.name(), b.name(), outcome);
                played += 1;
            }
        }
        played
    }
}

/// Disjoint mutable borrows of two agents, `i < j`.
fn both(agents: &mut [Agent], i: usize, j: usize) -> (&mut Agent, &mut Agent) {
    debug_assert!(i < j);
    let (head, tail) = agents.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
