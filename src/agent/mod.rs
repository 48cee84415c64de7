mod agent;
mod record;

pub use agent::*;
pub use record::*;
