//! Missions - the player's victory condition
//!
//! A mission is assigned once per game and never changes kind. Elimination
//! is checked by scanning the map; conquest keeps a running counter fed by
//! attack outcomes.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::AttackOutcome;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::Faction;
use crate::registry::Registry;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionKind {
    /// Win once no territory belongs to `target`
    EliminateFaction { target: Faction },
    /// Win once `progress` reaches `threshold`
    AccumulateConquests { threshold: usize, progress: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Faction the player commands
    pub player: Faction,
    pub kind: MissionKind,
}

impl Mission {
    pub fn eliminate(player: Faction, target: Faction) -> Self {
        Self {
            player,
            kind: MissionKind::EliminateFaction { target },
        }
    }

    /// Conquest mission whose counter starts at `baseline`
    pub fn accumulate(player: Faction, threshold: usize, baseline: usize) -> Self {
        Self {
            player,
            kind: MissionKind::AccumulateConquests {
                threshold,
                progress: baseline,
            },
        }
    }

    /// Pick one of the two mission kinds with equal odds
    ///
    /// A conquest mission's counter starts at the number of territories the
    /// player already holds, while victory compares against the absolute
    /// threshold.
    pub fn assign<R: Rng + ?Sized>(
        registry: &Registry,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let player = config.player()?;

        let mission = if rng.gen_bool(0.5) {
            Self::eliminate(player, config.target()?)
        } else {
            let baseline = registry.count_owned_by(&player);
            Self::accumulate(player, config.conquest_threshold, baseline)
        };

        tracing::info!("Mission assigned: {}", mission);
        Ok(mission)
    }

    /// Count a conquest if the outcome is a fresh capture by the player
    ///
    /// Returns true when progress advanced.
    pub fn update(&mut self, outcome: &AttackOutcome) -> bool {
        let MissionKind::AccumulateConquests { threshold, progress } = &mut self.kind else {
            return false;
        };

        let fresh_capture = outcome.ownership_changed
            && outcome.attacker_faction == self.player
            && outcome.previous_faction != self.player
            && outcome.new_faction == self.player;

        if fresh_capture {
            *progress += 1;
            tracing::info!(
                "Mission progress: {} conquered territory {} ({}/{})",
                self.player,
                outcome.defender,
                progress,
                threshold
            );
        }

        fresh_capture
    }

    /// Has the mission been accomplished? Has no side effects.
    pub fn is_victory(&self, registry: &Registry) -> bool {
        match &self.kind {
            MissionKind::EliminateFaction { target } => !registry.owns_any(target),
            MissionKind::AccumulateConquests { threshold, progress } => progress >= threshold,
        }
    }

    /// Conquest counter, if this mission keeps one
    pub fn progress(&self) -> Option<usize> {
        match self.kind {
            MissionKind::EliminateFaction { .. } => None,
            MissionKind::AccumulateConquests { progress, .. } => Some(progress),
        }
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MissionKind::EliminateFaction { target } => write!(
                f,
                "Destroy the {} army: every {} territory must change hands",
                target, target
            ),
            MissionKind::AccumulateConquests { threshold, progress } => write!(
                f,
                "Conquer {} territories beyond those you already hold (conquest progress: {}, goal: {})",
                threshold, progress, threshold
            ),
        }
    }
}
