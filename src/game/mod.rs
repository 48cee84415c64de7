//! Single-round mechanics: the two moves, the payoff table that prices
//! them, and the outcome of one simultaneous exchange.
mod action;
mod outcome;
mod payoffs;

pub use action::*;
pub use outcome::*;
pub use payoffs::*;
