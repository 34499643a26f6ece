//! Search configuration: difficulty, strategy choice and evaluator options

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Difficulty level, mapped to a search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth for this level (2, 3 or 4)
    pub fn max_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Next level, wrapping from hard back to easy
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "2" => Ok(Difficulty::Easy),
            "medium" | "3" => Ok(Difficulty::Medium),
            "hard" | "4" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, medium, hard".to_string(),
            }),
        }
    }
}

/// Which player implementation picks the moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Depth-limited minimax with alpha-beta pruning
    #[default]
    Minimax,
    /// Budgeted best-first search over the mover's own move sequences
    BestFirst,
    /// Uniformly random legal move (baseline opponent)
    Random,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::BestFirst => "best-first",
            StrategyKind::Random => "random",
        })
    }
}

impl FromStr for StrategyKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "alpha-beta" | "alphabeta" => Ok(StrategyKind::Minimax),
            "best-first" | "best_first" | "astar" | "a*" => Ok(StrategyKind::BestFirst),
            "random" => Ok(StrategyKind::Random),
            _ => Err(crate::Error::ParseStrategy {
                input: s.to_string(),
                expected: "minimax, best-first (astar), random".to_string(),
            }),
        }
    }
}

/// How the minimax evaluator counts mobility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MobilityModel {
    /// Empty cells one step away in any of the 8 compass directions, ignoring whether
    /// the diagonal is a spoke. Overcounts non-spoke diagonals.
    #[default]
    Compass,
    /// Only destinations that are legal moves in the connectivity graph
    Connections,
}

impl fmt::Display for MobilityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MobilityModel::Compass => "compass",
            MobilityModel::Connections => "connections",
        })
    }
}

impl FromStr for MobilityModel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compass" | "eight-way" => Ok(MobilityModel::Compass),
            "connections" | "legal" => Ok(MobilityModel::Connections),
            _ => Err(crate::Error::ParseMobilityModel {
                input: s.to_string(),
                expected: "compass, connections".to_string(),
            }),
        }
    }
}

/// Configuration handed to a strategy on every call.
///
/// # Examples
///
/// ```
/// use morris::config::{Difficulty, MobilityModel, SearchConfig, StrategyKind};
///
/// let config = SearchConfig::new(StrategyKind::Minimax, Difficulty::Hard)
///     .with_mobility(MobilityModel::Connections);
/// assert_eq!(config.max_depth(), 4);
/// assert_eq!(config.node_budget(), 400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub strategy: StrategyKind,
    pub difficulty: Difficulty,
    /// Explicit depth overriding the difficulty mapping
    pub depth: Option<u8>,
    pub mobility: MobilityModel,
    /// Alpha-beta pruning; turning it off must not change the chosen move
    pub pruning: bool,
}

impl SearchConfig {
    pub fn new(strategy: StrategyKind, difficulty: Difficulty) -> Self {
        Self {
            strategy,
            difficulty,
            depth: None,
            mobility: MobilityModel::default(),
            pruning: true,
        }
    }

    /// Set an explicit search depth.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set the mobility model.
    pub fn with_mobility(mut self, mobility: MobilityModel) -> Self {
        self.mobility = mobility;
        self
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Effective depth: the explicit override, else the difficulty's depth
    pub fn max_depth(&self) -> u8 {
        self.depth.unwrap_or_else(|| self.difficulty.max_depth())
    }

    /// Closed-set budget of the best-first search
    pub fn node_budget(&self) -> usize {
        usize::from(self.max_depth()) * 100
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(StrategyKind::default(), Difficulty::default())
    }
}

/// Player description used on the command line: `minimax:hard`, `best-first:easy`,
/// `random`, optionally with an explicit depth (`minimax:5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSpec {
    pub config: SearchConfig,
}

impl FromStr for PlayerSpec {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| crate::Error::ParsePlayerSpec {
            input: s.to_string(),
            reason,
        };

        let (strategy, level) = match s.split_once(':') {
            Some((strategy, level)) => (strategy, Some(level)),
            None => (s, None),
        };
        let strategy = strategy
            .parse::<StrategyKind>()
            .map_err(|e| invalid(e.to_string()))?;

        let mut config = SearchConfig::new(strategy, Difficulty::default());
        if let Some(level) = level {
            match level.parse::<Difficulty>() {
                Ok(difficulty) => config.difficulty = difficulty,
                Err(_) => {
                    let depth = level.trim().parse::<u8>().map_err(|_| {
                        invalid(format!("'{level}' is neither a difficulty nor a depth"))
                    })?;
                    if depth == 0 {
                        return Err(invalid("depth must be at least 1".to_string()));
                    }
                    config.depth = Some(depth);
                }
            }
        }

        Ok(PlayerSpec { config })
    }
}

impl fmt::Display for PlayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.config.strategy, self.config.depth) {
            (StrategyKind::Random, _) => write!(f, "random"),
            (strategy, Some(depth)) => write!(f, "{strategy}:{depth}"),
            (strategy, None) => write!(f, "{strategy}:{}", self.config.difficulty),
        }
    }
}
