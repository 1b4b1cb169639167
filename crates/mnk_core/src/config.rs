//! Game setup loaded once at construction and validated once; never
//! re-validated mid-search.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::board::Board;
use crate::error::InvalidConfig;
use crate::time_control::SearchLimits;
use crate::types::{Move, Player};

/// Which search procedure an engine runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl FromStr for Algorithm {
    type Err = InvalidConfig;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" => Ok(Algorithm::AlphaBeta),
            other => Err(InvalidConfig::Parse(format!("unknown algorithm: {other}"))),
        }
    }
}

/// Static evaluator consulted at depth/time cutoffs.
///
/// `None` disables static evaluation: a forced cutoff then scores 0, so it is
/// only a sensible choice when the configured depths solve every reachable
/// position exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    None,
    /// Move-local: same-mark neighbors of the most recently placed cell.
    Adjacency,
    /// Whole-board: mark majorities on every line long enough to win.
    LinePotential,
}

impl FromStr for Heuristic {
    type Err = InvalidConfig;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Heuristic::None),
            "adjacency" => Ok(Heuristic::Adjacency),
            "line-potential" => Ok(Heuristic::LinePotential),
            other => Err(InvalidConfig::Parse(format!("unknown heuristic: {other}"))),
        }
    }
}

/// Per-player search settings.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PlayerSettings {
    pub depth: u32,
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,
    #[serde(default = "default_heuristic")]
    pub heuristic: Heuristic,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            depth: 4,
            algorithm: default_algorithm(),
            heuristic: default_heuristic(),
        }
    }
}

fn default_algorithm() -> Algorithm {
    Algorithm::AlphaBeta
}

fn default_heuristic() -> Heuristic {
    Heuristic::LinePotential
}

/// Complete game setup: board geometry, blocked cells, per-player search
/// settings and the shared wall-clock budget per move.
#[derive(Clone, Debug, Deserialize)]
pub struct GameConfig {
    pub board_size: u8,
    pub win_size: u8,
    /// Blocked coordinates as `[x, y]` pairs.
    #[serde(default)]
    pub blocked: Vec<(u8, u8)>,
    /// Wall-clock budget per move, in seconds (absent = unlimited).
    #[serde(default)]
    pub time_budget: Option<f64>,
    #[serde(default)]
    pub player_x: PlayerSettings,
    #[serde(default)]
    pub player_o: PlayerSettings,
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, InvalidConfig> {
        let config: GameConfig =
            toml::from_str(text).map_err(|e| InvalidConfig::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the whole configuration; every later constructor call on a
    /// validated config succeeds.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        self.board().map(drop)?;
        if let Some(secs) = self.time_budget {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(InvalidConfig::TimeBudget { seconds: secs });
            }
        }
        Ok(())
    }

    /// Build the configured board.
    pub fn board(&self) -> Result<Board, InvalidConfig> {
        let blocked: Vec<Move> = self
            .blocked
            .iter()
            .map(|&(x, y)| Move::new(x, y))
            .collect();
        Board::new(self.board_size, self.win_size, &blocked)
    }

    /// Per-move search limits carrying both players' depths and the shared
    /// time budget.
    pub fn limits(&self) -> SearchLimits {
        let limits = SearchLimits::per_player(self.player_x.depth, self.player_o.depth);
        match self.time_budget {
            Some(secs) => limits.with_time(Duration::from_secs_f64(secs)),
            None => limits,
        }
    }

    pub fn settings_for(&self, player: Player) -> PlayerSettings {
        match player {
            Player::X => self.player_x,
            Player::O => self.player_o,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
