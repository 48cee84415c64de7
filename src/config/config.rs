use crate::Error;
use crate::PayoffTable;
use crate::Payoffs;
use crate::Registry;
use crate::Seed;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// One configured participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Strategy kind, as registered.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unique name within the run.
    pub name: String,
}

/// Everything needed to set up a run, as read from a JSON file.
///
/// ```json
/// {
///   "agents": [ { "type": "TitForTat", "name": "alice" } ],
///   "payoff_matrix": {
///     "cooperate": { "cooperate": [3, 3], "defect": [0, 5] },
///     "defect":    { "cooperate": [5, 0], "defect": [1, 1] }
///   },
///   "rounds": 10,
///   "seed": 1234
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub agents: Vec<Entry>,
    pub payoff_matrix: PayoffTable,
    pub rounds: usize,
    /// Pins every random source; drawn fresh when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
}

impl Config {
    /// Reads and parses a configuration file. Nothing is defaulted except `seed`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))?;
        Self::try_from(text.as_str())
            .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))
    }

    /// Checks the whole configuration before anything is built and
    /// returns the payoff model it describes.
    ///
    /// Order: rounds, payoff table, duplicate names, strategy kinds.
    pub fn validate(&self, registry: &Registry) -> Result<Payoffs, Error> {
        if self.rounds == 0 {
            return Err(Error::Configuration("rounds must be positive".to_string()));
        }
        let payoffs = Payoffs::try_from(&self.payoff_matrix)?;
        let mut names = BTreeSet::new();
        for entry in self.agents.iter() {
            if !names.insert(entry.name.as_str()) {
                return Err(Error::DuplicateAgentIdentity(entry.name.clone()));
            }
        }
        for entry in self.agents.iter() {
            if !registry.contains(&entry.kind) {
                return Err(Error::UnknownStrategyKind(entry.kind.clone()));
            }
        }
        if self.agents.len() < 2 {
            log::warn!("{} agent(s) configured, nobody will play", self.agents.len());
        }
        if !payoffs.is_symmetric() {
            log::warn!("payoff matrix is not symmetric under swapping players");
        }
        Ok(payoffs)
    }
}

impl TryFrom<&str> for Config {
    type Error = Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(json).map_err(|e| Error::Configuration(e.to_string()))
    }
}
