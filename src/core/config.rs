//! Game configuration with documented constants
//!
//! The roster size and palette are fixed. Everything a player may tune
//! lives in [`GameConfig`] and can be loaded from a TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::core::error::{Result, WarError};
use crate::core::types::Faction;

/// Number of territories on the map
pub const TERRITORY_COUNT: usize = 5;

/// Faction palette, assigned to territories cyclically
pub const FACTION_PALETTE: [&str; 3] = ["Azul", "Vermelho", "Verde"];

/// Fewest troops a territory starts with
pub const MIN_STARTING_TROOPS: u32 = 3;

/// Number of distinct starting troop counts (3, 4, 5)
pub const STARTING_TROOP_SPREAD: u32 = 3;

/// Garrison left in a territory that drops to zero troops
pub const MIN_GARRISON: u32 = 1;

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Faction the player commands
    ///
    /// Conquest missions only count territories taken by this faction.
    pub player_faction: String,

    /// Faction that must be wiped off the map for an elimination mission
    pub elimination_target: String,

    /// Conquests needed to win a conquest mission
    ///
    /// Compared against the running counter directly. The counter starts at
    /// the player's owned territory count, so with the default palette the
    /// player is two territories into a threshold of 3 before the first turn.
    pub conquest_threshold: usize,

    /// Seed for dice and mission assignment; drawn from the OS when absent
    pub seed: Option<u64>,

    /// Default `tracing` filter directive when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_faction: "Azul".into(),
            elimination_target: "Verde".into(),
            conquest_threshold: 3,
            seed: None,
            log_filter: "territory_war=info".into(),
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; missing keys take default values
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.conquest_threshold == 0 {
            return Err(WarError::InvalidConfig(
                "conquest_threshold must be at least 1".into(),
            ));
        }

        for (key, value) in [
            ("player_faction", &self.player_faction),
            ("elimination_target", &self.elimination_target),
        ] {
            Faction::new(value.as_str())?;
            if !FACTION_PALETTE.contains(&value.as_str()) {
                return Err(WarError::InvalidConfig(format!(
                    "{} '{}' is not one of {:?}",
                    key, value, FACTION_PALETTE
                )));
            }
        }

        self.env_filter()?;

        if self.player_faction == self.elimination_target {
            return Err(WarError::InvalidConfig(format!(
                "player_faction and elimination_target are both '{}'",
                self.player_faction
            )));
        }

        Ok(())
    }

    /// Parse `log_filter` into a `tracing` filter
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(self.log_filter.as_str()).map_err(|e| {
            WarError::InvalidConfig(format!("log_filter '{}': {}", self.log_filter, e))
        })
    }

    /// Player faction as a validated name
    pub fn player(&self) -> Result<Faction> {
        Faction::new(self.player_faction.as_str())
    }

    /// Elimination target as a validated name
    pub fn target(&self) -> Result<Faction> {
        Faction::new(self.elimination_target.as_str())
    }
}
