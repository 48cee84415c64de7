use super::*;
use crate::Points;

/// Both moves of one simultaneous round and what each side earned.
///
/// Transient: the scheduler applies it to both agents and drops it.
/// Reporting rebuilds payoffs from retained histories instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    actions: (Action, Action),
    payoffs: (Points, Points),
}

impl Outcome {
    pub fn new(a: Action, b: Action, payoffs: &Payoffs) -> Self {
        Self {
            actions: (a, b),
            payoffs: payoffs.payoffs(a, b),
        }
    }
    pub fn actions(&self) -> (Action, Action) {
        self.actions
    }
    pub fn payoffs(&self) -> (Points, Points) {
        self.payoffs
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {:+} {:+}",
            self.actions.0, self.actions.1, self.payoffs.0, self.payoffs.1
        )
    }
}
