//! Round-robin play and the run driver that wires it to configuration.
mod scheduler;
mod tournament;

pub use scheduler::*;
pub use tournament::*;
