//! Tournament Binary
//!
//! Loads a configuration, plays the round-robin, prints the results and
//! saves one JSON artifact per pairing.
//!
//! Options: --config, --seed, --out, --no-save, --list, --quiet, --verbose

use anyhow::Context;
use clap::Parser;
use dilemma::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON configuration
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,
    /// Overrides the seed in the configuration
    #[arg(short, long)]
    seed: Option<Seed>,
    /// Directory for per-pairing artifacts
    #[arg(short, long, default_value = "games")]
    out: PathBuf,
    /// Skip writing artifacts
    #[arg(long)]
    no_save: bool,
    /// Print the registered strategy kinds and exit
    #[arg(long)]
    list: bool,
    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
    /// Log every round
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => log::LevelFilter::Warn,
            (_, true) => log::LevelFilter::Debug,
            _ => log::LevelFilter::Info,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level())?;
    let ref registry = Registry::default();
    if args.list {
        for kind in registry.kinds() {
            let strategy = registry.strategy(kind, 0)?;
            println!("{:<16}{:<6}{}", kind, strategy.label(), strategy.description());
        }
        return Ok(());
    }
    let mut config = Config::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let mut tournament = Tournament::new(&config, registry)
        .with_context(|| format!("set up {}", args.config.display()))?;
    println!("{}\n", tournament.payoffs());
    tournament.run()?;
    let report = tournament.report();
    println!("{}", report);
    if !args.no_save {
        report.save(&args.out)?;
    }
    log::info!(
        "rerun with --seed {} to reproduce (same build only)",
        tournament.seed()
    );
    Ok(())
}
