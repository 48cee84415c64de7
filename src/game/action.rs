use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// One move in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Cooperate,
    Defect,
}

impl Action {
    pub const ALL: [Self; 2] = [Self::Cooperate, Self::Defect];

    pub fn is_cooperate(&self) -> bool {
        matches!(self, Self::Cooperate)
    }
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Defect)
    }
    /// Lowercase name, as used for payoff table keys.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cooperate => "cooperate",
            Self::Defect => "defect",
        }
    }
    /// Position of this action in a 2x2 table.
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Cooperate => 0,
            Self::Defect => 1,
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "cooperate" => Ok(Self::Cooperate),
            "defect" => Ok(Self::Defect),
            _ => Err(anyhow::anyhow!("invalid action: {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Cooperate => write!(f, "{}", "C".green()),
            Self::Defect => write!(f, "{}", "D".red()),
        }
    }
}
