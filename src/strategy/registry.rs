use super::*;
use crate::Agent;
use crate::Error;
use crate::Seed;
use std::collections::BTreeMap;

/// Builds a fresh strategy from the seed assigned to its agent.
pub type Constructor = Box<dyn Fn(Seed) -> Box<dyn Strategy>>;

/// Strategy kinds by name.
///
/// Constructed explicitly and handed to whoever builds agents, so separate
/// runs (and parallel tests) never share registrations. New kinds plug in
/// without touching the scheduler or the run driver.
pub struct Registry(BTreeMap<String, Constructor>);

impl Registry {
    /// A registry that knows no kinds at all.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }
    /// Associates `kind` with a constructor. Re-registering a kind replaces it.
    pub fn register<F>(&mut self, kind: &str, constructor: F)
    where
        F: Fn(Seed) -> Box<dyn Strategy> + 'static,
    {
        if self.0.insert(kind.to_string(), Box::new(constructor)).is_some() {
            log::debug!("strategy kind {} re-registered", kind);
        }
    }
    pub fn contains(&self, kind: &str) -> bool {
        self.0.contains_key(kind)
    }
    /// Registered kinds in sorted order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    /// Instantiates the strategy registered under `kind`.
    pub fn strategy(&self, kind: &str, seed: Seed) -> Result<Box<dyn Strategy>, Error> {
        self.0
            .get(kind)
            .map(|constructor| constructor(seed))
            .ok_or_else(|| Error::UnknownStrategyKind(kind.to_string()))
    }
    /// Instantiates an agent named `name` playing the strategy registered under `kind`.
    pub fn create(&self, kind: &str, name: &str, seed: Seed) -> Result<Agent, Error> {
        self.strategy(kind, seed)
            .map(|strategy| Agent::new(name, kind, strategy))
    }
}

/// The six built-in kinds.
impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("TitForTat", |_| Box::new(TitForTat));
        registry.register("Random", |seed| Box::new(Random::seeded(seed)));
        registry.register("TitForTwoTats", |_| Box::new(TitForTwoTats));
        registry.register("Grudger", |_| Box::new(Grudger));
        registry.register("Cooperator", |_| Box::new(Cooperator));
        registry.register("Defector", |_| Box::new(Defector));
        registry
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}
