//! Game configuration: difficulty, node budget and move order

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Configuration values rejected at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("node budget must be at least 1")]
    ZeroBudget,
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
    #[error("unknown first mover '{0}' (expected human or computer)")]
    UnknownFirstMover(String),
}

/// Number of max nodes a search may enter before it falls back to the
/// heuristic. Always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeBudget(u64);

impl NodeBudget {
    pub fn new(nodes: u64) -> Result<Self, ConfigError> {
        if nodes == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(Self(nodes))
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Node budget for this tier. Hard is the smallest budget that still
    /// never loses.
    pub const fn nodes(self) -> u64 {
        match self {
            Difficulty::Easy => 49,
            Difficulty::Medium => 3_177,
            Difficulty::Hard => 203_374,
        }
    }

    pub fn budget(self) -> NodeBudget {
        NodeBudget(self.nodes())
    }

    /// Tier whose budget is exactly `budget`, if any
    pub fn from_budget(budget: NodeBudget) -> Option<Difficulty> {
        Self::ALL.into_iter().find(|d| d.nodes() == budget.get())
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Which side opens the first game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FirstMover {
    #[default]
    Human,
    Computer,
}

impl FromStr for FirstMover {
    type Err = ConfigError;

    /// Accepts `human`/`computer`, or the turn number `1`/`2` of the human
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "1" => Ok(FirstMover::Human),
            "computer" | "2" => Ok(FirstMover::Computer),
            _ => Err(ConfigError::UnknownFirstMover(s.to_string())),
        }
    }
}

/// Startup configuration for a human-vs-computer game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub budget: NodeBudget,
    pub first_mover: FirstMover,
    pub human_name: String,
    pub computer_name: String,
}

impl GameConfig {
    pub fn new(difficulty: Difficulty, first_mover: FirstMover) -> Self {
        Self {
            budget: difficulty.budget(),
            first_mover,
            ..Self::default()
        }
    }

    /// Replace the tier budget with a custom one
    pub fn with_budget(mut self, nodes: u64) -> Result<Self, ConfigError> {
        self.budget = NodeBudget::new(nodes)?;
        Ok(self)
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_budget(self.budget)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            budget: Difficulty::default().budget(),
            first_mover: FirstMover::default(),
            human_name: "Player".to_string(),
            computer_name: "Computer".to_string(),
        }
    }
}
