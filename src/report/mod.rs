//! Read-only views over a finished run, for whoever renders or stores it.
mod matchup;
mod report;
mod standing;

pub use matchup::*;
pub use report::*;
pub use standing::*;
