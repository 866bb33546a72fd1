//! Engine configuration
//!
//! Loaded from JSON with serde; every field has a default so a partial file
//! (or `{}`) is a valid configuration.
//!
//! ```json
//! { "max_depth": 5, "time_budget_ms": 3000, "use_book": false, "seed": 7 }
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_TIME_BUDGET_MS, MAX_SEARCH_DEPTH};
use crate::error::{ChessError, ChessResult};

/// When the king switches to its endgame square table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndgameRule {
    /// Both sides still have all eight pawns
    #[default]
    FullPawnCount,
    /// For each side: no queen, or a queen with no rooks and at most one
    /// minor piece
    ReducedMaterial,
}

/// How the engine picks its move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Opening book, then alpha-beta search
    #[default]
    Search,
    /// Any legal move, uniformly at random
    Random,
}

/// Configuration for [`Engine`](crate::engine::Engine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deepest iterative-deepening iteration
    pub max_depth: u32,
    /// Time after which no further depth is started
    pub time_budget_ms: u64,
    /// Consult the opening book before searching
    pub use_book: bool,
    /// Seed for book and random-move choices; `None` seeds from the OS
    pub seed: Option<u64>,
    pub endgame_rule: EndgameRule,
    pub strategy: Strategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            use_book: true,
            seed: None,
            endgame_rule: EndgameRule::default(),
            strategy: Strategy::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        let config: EngineConfig = serde_json::from_str(json).map_err(|e| ChessError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChessResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChessError::Config {
            message: e.to_string(),
        })
    }

    /// Check the values are usable by the search
    pub fn validate(&self) -> ChessResult<()> {
        if self.max_depth == 0 || self.max_depth > MAX_SEARCH_DEPTH {
            return Err(ChessError::Config {
                message: format!("max_depth must be between 1 and {}, got {}", MAX_SEARCH_DEPTH, self.max_depth),
            });
        }
        Ok(())
    }
}
