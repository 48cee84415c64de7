//! Iterated Prisoner's Dilemma between strategy-driven agents.
//!
//! Agents are built from a [`Config`] through a [`Registry`] of strategy
//! kinds, then every unordered pair plays a fixed number of simultaneous
//! rounds. Each agent keeps its own view of the history against every
//! opponent together with a running score; reporting reads that state back
//! as [`Standing`]s and per-pair [`Matchup`]s.
pub mod agent;
pub mod config;
pub mod game;
pub mod report;
pub mod strategy;
pub mod tournament;

pub use agent::*;
pub use config::*;
pub use game::*;
pub use report::*;
pub use strategy::*;
pub use tournament::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs and accumulated scores.
pub type Points = i64;
/// Seed material for every random source in a run.
pub type Seed = u64;

// ============================================================================
// ERRORS
// ============================================================================
/// Everything that can stop a run from starting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configured agent names a strategy kind the registry does not know.
    UnknownStrategyKind(String),
    /// Missing or malformed configuration.
    Configuration(String),
    /// Two configured agents share a name.
    DuplicateAgentIdentity(String),
    /// The tournament has already been played.
    AlreadyRun,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategyKind(kind) => write!(f, "unknown strategy kind: {}", kind),
            Self::Configuration(s) => write!(f, "configuration error: {}", s),
            Self::DuplicateAgentIdentity(name) => write!(f, "duplicate agent name: {}", name),
            Self::AlreadyRun => write!(f, "tournament has already been run"),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
