//! Combat: dice and attack resolution

pub mod dice;
pub mod resolution;

pub use dice::{DiceRoll, DIE_FACES};
pub use resolution::{resolve_attack, resolve_with_roll, validate_attack, AttackOutcome};
