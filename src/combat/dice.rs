//! Six-sided dice for attack resolution

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WarError};

pub const DIE_FACES: u8 = 6;

/// One die per side of an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub attacker: u8,
    pub defender: u8,
}

impl DiceRoll {
    /// Forced roll; both faces must be in 1..=6
    pub fn new(attacker: u8, defender: u8) -> Result<Self> {
        for value in [attacker, defender] {
            if !(1..=DIE_FACES).contains(&value) {
                return Err(WarError::InvalidRoll { value });
            }
        }
        Ok(Self { attacker, defender })
    }

    /// Draw the attacker's die, then the defender's
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let attacker = rng.gen_range(1..=DIE_FACES);
        let defender = rng.gen_range(1..=DIE_FACES);
        Self { attacker, defender }
    }

    /// Ties go to the attacker
    pub fn attacker_wins(&self) -> bool {
        self.attacker >= self.defender
    }
}
