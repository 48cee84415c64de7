use crate::Agent;
use crate::Points;
use serde::Serialize;

/// Final line for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub name: String,
    pub kind: String,
    pub label: String,
    pub description: String,
    pub score: Points,
}

impl From<&Agent> for Standing {
    fn from(agent: &Agent) -> Self {
        Self {
            name: agent.name().to_string(),
            kind: agent.kind().to_string(),
            label: agent.label().to_string(),
            description: agent.description().to_string(),
            score: agent.score(),
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<16}{:<6}{:>8}",
            self.name,
            format!("({})", self.label),
            self.score
        )
    }
}
