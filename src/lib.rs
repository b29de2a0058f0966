//! Territory War - dice-driven territorial conquest with missions

pub mod combat;
pub mod core;
pub mod mission;
pub mod registry;
pub mod session;

pub use crate::combat::{resolve_attack, AttackOutcome, DiceRoll};
pub use crate::core::{GameConfig, Result, WarError};
pub use crate::mission::{Mission, MissionKind};
pub use crate::registry::{Registry, Territory};
pub use crate::session::{GameSession, TurnReport};
