use super::*;
use crate::Agent;
use crate::Config;
use crate::Error;
use crate::Matchup;
use crate::Payoffs;
use crate::Registry;
use crate::Report;
use crate::Seed;
use crate::Standing;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// Run driver: agents built from configuration, played once, then read back.
#[derive(Debug)]
pub struct Tournament {
    agents: Vec<Agent>,
    scheduler: Scheduler,
    seed: Seed,
    complete: bool,
}

impl Tournament {
    /// Builds every agent, using the configured seed or drawing a fresh one.
    pub fn new(config: &Config, registry: &Registry) -> Result<Self, Error> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::seeded(config, registry, seed)
    }

    /// Builds every agent from `seed`, ignoring any seed in `config`.
    /// Fails before any agent exists if the configuration is invalid.
    pub fn seeded(config: &Config, registry: &Registry, seed: Seed) -> Result<Self, Error> {
        let payoffs = config.validate(registry)?;
        let agents = config
            .agents
            .iter()
            .map(|entry| registry.create(&entry.kind, &entry.name, Self::derive(seed, &entry.name)))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("seeded {} agents from {}", agents.len(), seed);
        Ok(Self {
            agents,
            scheduler: Scheduler::new(payoffs, config.rounds),
            seed,
            complete: false,
        })
    }

    /// Per-agent seed, tied to the name rather than the list position.
    ///
    /// `DefaultHasher` is stable within one build but its algorithm may
    /// change between Rust releases, and `SmallRng` may change between
    /// `rand` releases. A pinned seed therefore replays a run exactly only
    /// on the same toolchain and `rand` version.
    fn derive(seed: Seed, name: &str) -> Seed {
        let ref mut hasher = DefaultHasher::new();
        seed.hash(hasher);
        name.hash(hasher);
        hasher.finish()
    }

    /// Plays the full round-robin. Only the first call plays; later calls
    /// fail with [`Error::AlreadyRun`] and leave every agent untouched.
    pub fn run(&mut self) -> Result<usize, Error> {
        if self.complete {
            return Err(Error::AlreadyRun);
        }
        log::info!(
            "playing {} rounds between {} agents ({} interactions)",
            self.scheduler.rounds(),
            self.agents.len(),
            self.scheduler.interactions(self.agents.len())
        );
        let played = self.scheduler.run(&mut self.agents);
        self.complete = true;
        if let Some(leader) = self.agents.iter().max_by_key(|a| a.score()) {
            log::info!(
                "finished {} interactions, {} leads with {}",
                played,
                leader.name(),
                leader.score()
            );
        }
        Ok(played)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
    pub fn seed(&self) -> Seed {
        self.seed
    }
    pub fn rounds(&self) -> usize {
        self.scheduler.rounds()
    }
    pub fn payoffs(&self) -> &Payoffs {
        self.scheduler.payoffs()
    }
    /// Agents in configuration order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }
    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name() == name)
    }

    /// One line per agent, in configuration order.
    pub fn standings(&self) -> Vec<Standing> {
        self.agents.iter().map(Standing::from).collect()
    }
    /// The series between `left` and `right`, from `left`'s side.
    pub fn matchup(&self, left: &str, right: &str) -> Option<Matchup> {
        Matchup::new(self.agent(left)?, self.agent(right)?, self.payoffs())
    }
    /// One series per unordered pair that has played, in scheduling order.
    pub fn matchups(&self) -> Vec<Matchup> {
        Scheduler::pairs(self.agents.len())
            .filter_map(|(i, j)| Matchup::new(&self.agents[i], &self.agents[j], self.payoffs()))
            .collect()
    }
    pub fn report(&self) -> Report {
        Report {
            seed: self.seed,
            rounds: self.rounds(),
            payoff_matrix: self.payoffs().into(),
            standings: self.standings(),
            matchups: self.matchups(),
        }
    }
}
