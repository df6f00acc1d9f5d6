// Configuration module for reading Engine.toml
// Every tunable of the engine, the self-play driver and the decision log lives here

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::EngineError;
use crate::search::alphabeta::DEFAULT_DEPTH_LIMIT;
use crate::search::{Algorithm, MoveOrdering};

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub search: SearchConfig,
    pub board: BoardConfig,
    pub debug: DebugConfig,
    pub selfplay: SelfPlayConfig,
}

/// Move selection parameters
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Plies expanded past the root reply before the static cutoff (alpha-beta only)
    pub depth_limit: u32,
    pub move_ordering: MoveOrdering,
    /// Evaluate root moves on the rayon pool, one cache per root move
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            algorithm: Algorithm::AlphaBeta,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            move_ordering: MoveOrdering::ResultingPosition,
            parallel_root: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub size: usize,
}

/// Decision log configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

/// Who plays Second in self-play games
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    Engine,
    Random,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayConfig {
    pub games: u32,
    pub seed: u64,
    pub opponent: Opponent,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Engine.toml configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| EngineError::io(path.display().to_string(), e))?;

        Ok(toml::from_str(&contents)?)
    }

    /// Loads default configuration from Engine.toml in the project root
    pub fn load_default() -> Result<Self, EngineError> {
        Self::from_file("Engine.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Engine.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig::default(),
            board: BoardConfig { size: 8 },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "othello_debug.jsonl".to_string(),
            },
            selfplay: SelfPlayConfig {
                games: 1,
                seed: 42,
                opponent: Opponent::Engine,
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            warn!("Could not load Engine.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}
