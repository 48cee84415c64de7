//! Decision rules and the registry that maps kind names onto them.
//!
//! A strategy sees exactly one agent's view of one pairing: its own past
//! moves and the opponent's past moves, index-aligned by round. It never
//! sees the opponent's move for the round being decided.
//!
//! ## Implementations
//!
//! - [`TitForTat`] — opens nice, then copies the opponent's last move
//! - [`TitForTwoTats`] — retaliates only after two defections in a row
//! - [`Grudger`] — cooperates until the first defection, then never again
//! - [`Cooperator`] — always cooperates
//! - [`Defector`] — always defects
//! - [`Random`] — fair coin flip per round, from an injected generator
mod cooperator;
mod defector;
mod grudger;
mod random;
mod registry;
mod titfortat;
mod titfortwotats;

pub use cooperator::*;
pub use defector::*;
pub use grudger::*;
pub use random::*;
pub use registry::*;
pub use titfortat::*;
pub use titfortwotats::*;

use crate::Action;

/// Chooses the next move against one opponent.
///
/// `mine` and `theirs` are equally long and aligned: `mine[k]` and
/// `theirs[k]` were played simultaneously in round `k`. Both are empty
/// before the first meeting. Implementations must depend on nothing but
/// these two sequences, except for an owned random source.
pub trait Strategy {
    fn choose(&mut self, mine: &[Action], theirs: &[Action]) -> Action;
    /// Short tag for plots and tables.
    fn label(&self) -> &'static str;
    /// One-line summary of the rule.
    fn description(&self) -> &'static str;
}
