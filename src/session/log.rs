//! Battle log - record of every resolved attack

use serde::{Deserialize, Serialize};

use crate::combat::AttackOutcome;
use crate::core::error::Result;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleEntry {
    pub turn: u32,
    pub outcome: AttackOutcome,
    pub mission_advanced: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BattleLog {
    pub entries: Vec<BattleEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, turn: u32, outcome: AttackOutcome, mission_advanced: bool) {
        self.entries.push(BattleEntry {
            turn,
            outcome,
            mission_advanced,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn conquests(&self) -> impl Iterator<Item = &BattleEntry> {
        self.entries.iter().filter(|e| e.outcome.ownership_changed)
    }

    pub fn entries_for_territory(&self, index: usize) -> impl Iterator<Item = &BattleEntry> {
        self.entries
            .iter()
            .filter(move |e| e.outcome.attacker == index || e.outcome.defender == index)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
