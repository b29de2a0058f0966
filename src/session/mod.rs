//! Game session
//!
//! Owns the registry, the mission, the dice RNG and the battle log. Each
//! call to [`GameSession::attack`] is one complete turn: resolve, update the
//! mission, check victory, record.

pub mod log;

pub use log::{BattleEntry, BattleLog};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{resolve_attack, AttackOutcome};
use crate::core::config::{GameConfig, TERRITORY_COUNT};
use crate::core::error::Result;
use crate::mission::Mission;
use crate::registry::Registry;

/// Result of one turn
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub outcome: AttackOutcome,
    pub mission_advanced: bool,
    pub victory: bool,
}

#[derive(Debug)]
pub struct GameSession {
    registry: Registry,
    mission: Mission,
    rng: ChaCha8Rng,
    log: BattleLog,
    turn: u32,
    seed: u64,
}

impl GameSession {
    /// Start a game on the standard map
    pub fn new(config: &GameConfig) -> Result<Self> {
        let registry = Registry::initialize(TERRITORY_COUNT)?;
        Self::with_registry(config, registry)
    }

    /// Start a game on a prepared map
    pub fn with_registry(config: &GameConfig, registry: Registry) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mission = Mission::assign(&registry, config, &mut rng)?;

        tracing::debug!("Session seeded with {}", seed);

        Ok(Self {
            registry,
            mission,
            rng,
            log: BattleLog::new(),
            turn: 0,
            seed,
        })
    }

    /// Resolve one attack between 1-based territory indices
    ///
    /// Rejected attacks leave the session untouched and do not use a turn.
    pub fn attack(&mut self, attacker: usize, defender: usize) -> Result<TurnReport> {
        let outcome = resolve_attack(&mut self.registry, attacker, defender, &mut self.rng)?;
        self.turn += 1;

        let mission_advanced = self.mission.update(&outcome);
        let victory = self.mission.is_victory(&self.registry);
        if victory {
            tracing::info!("Mission accomplished on turn {}", self.turn);
        }

        self.log.record(self.turn, outcome.clone(), mission_advanced);

        Ok(TurnReport {
            outcome,
            mission_advanced,
            victory,
        })
    }

    pub fn check_victory(&self) -> bool {
        self.mission.is_victory(&self.registry)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Turns played so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// End the game, releasing the map
    pub fn finish(mut self) -> BattleLog {
        self.registry.teardown();
        self.log
    }
}
