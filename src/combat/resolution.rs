//! Attack resolution
//!
//! One die each side, attacker wins ties. A winning attacker costs the
//! defender one troop; a defender left with no troops is garrisoned with
//! one troop and, if the factions differ, changes hands.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::dice::DiceRoll;
use crate::core::config::MIN_GARRISON;
use crate::core::error::{Result, WarError};
use crate::core::types::Faction;
use crate::registry::Registry;

/// What happened in one resolved attack
///
/// Carries everything mission tracking needs so it never has to look at the
/// registry or the dice again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attacker: usize,
    pub defender: usize,
    pub attacker_roll: u8,
    pub defender_roll: u8,
    /// Troops the defender lost (0 or 1)
    pub troops_lost: u32,
    pub ownership_changed: bool,
    pub attacker_faction: Faction,
    /// Defender's owner before the attack
    pub previous_faction: Faction,
    /// Defender's owner after the attack
    pub new_faction: Faction,
}

impl AttackOutcome {
    pub fn attacker_won(&self) -> bool {
        self.attacker_roll >= self.defender_roll
    }
}

/// Check attacker/defender indices and the attacker's troops
///
/// Order: attacker index, defender index, self-attack, empty attacker.
pub fn validate_attack(registry: &Registry, attacker: usize, defender: usize) -> Result<()> {
    let source = registry.get(attacker)?;
    registry.check_index(defender)?;

    if attacker == defender {
        return Err(WarError::SelfAttack { index: attacker });
    }

    if source.troops == 0 {
        return Err(WarError::NoTroops {
            index: attacker,
            name: source.name.to_string(),
        });
    }

    Ok(())
}

/// Roll the dice and resolve an attack
///
/// Nothing is drawn from `rng` when the attack is rejected.
pub fn resolve_attack<R: Rng + ?Sized>(
    registry: &mut Registry,
    attacker: usize,
    defender: usize,
    rng: &mut R,
) -> Result<AttackOutcome> {
    validate_attack(registry, attacker, defender)?;
    let roll = DiceRoll::roll(rng);
    apply_roll(registry, attacker, defender, roll)
}

/// Resolve an attack with a predetermined roll
pub fn resolve_with_roll(
    registry: &mut Registry,
    attacker: usize,
    defender: usize,
    roll: DiceRoll,
) -> Result<AttackOutcome> {
    validate_attack(registry, attacker, defender)?;
    apply_roll(registry, attacker, defender, roll)
}

fn apply_roll(
    registry: &mut Registry,
    attacker: usize,
    defender: usize,
    roll: DiceRoll,
) -> Result<AttackOutcome> {
    let attacker_faction = registry.get(attacker)?.faction.clone();
    let target = registry.get_mut(defender)?;
    let previous_faction = target.faction.clone();

    tracing::debug!(
        "Dice: {} (attacker {}) rolled {} | {} (defender {}) rolled {}",
        attacker_faction,
        attacker,
        roll.attacker,
        previous_faction,
        defender,
        roll.defender
    );

    let mut troops_lost = 0;
    let mut ownership_changed = false;

    if roll.attacker_wins() {
        if target.troops > 0 {
            target.troops -= 1;
            troops_lost = 1;
        }

        if target.troops == 0 {
            if target.faction != attacker_faction {
                target.faction = attacker_faction.clone();
                ownership_changed = true;
                tracing::info!("{} conquered by {}", target.name, attacker_faction);
            } else {
                tracing::debug!("{} already held by {}, regarrisoned", target.name, attacker_faction);
            }
            target.troops = MIN_GARRISON;
        }
    } else {
        tracing::debug!("{} held the line", target.name);
    }

    Ok(AttackOutcome {
        attacker,
        defender,
        attacker_roll: roll.attacker,
        defender_roll: roll.defender,
        troops_lost,
        ownership_changed,
        attacker_faction,
        previous_faction,
        new_faction: target.faction.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Territory;

    fn roll(a: u8, d: u8) -> DiceRoll {
        DiceRoll::new(a, d).unwrap()
    }

    fn two_territories(
        (fa, ta): (&str, u32),
        (fd, td): (&str, u32),
    ) -> Registry {
        Registry::from_territories(vec![
            Territory::new("Alpha", fa, ta).unwrap(),
            Territory::new("Beta", fd, td).unwrap(),
        ])
    }

    #[test]
    fn test_win_costs_one_troop() {
        let mut registry = two_territories(("Azul", 3), ("Verde", 3));
        let outcome = resolve_with_roll(&mut registry, 1, 2, roll(4, 4)).unwrap();

        assert!(outcome.attacker_won());
        assert_eq!(outcome.troops_lost, 1);
        assert!(!outcome.ownership_changed);
        assert_eq!(registry.get(2).unwrap().troops, 2);
        assert_eq!(registry.get(2).unwrap().faction, "Verde");
        // Attacker never loses troops
        assert_eq!(registry.get(1).unwrap().troops, 3);
    }

    #[test]
    fn test_last_troop_changes_hands() {
        let mut registry = two_territories(("Azul", 2), ("Verde", 1));
        let outcome = resolve_with_roll(&mut registry, 1, 2, roll(5, 1)).unwrap();

        assert!(outcome.ownership_changed);
        assert_eq!(outcome.previous_faction, "Verde");
        assert_eq!(outcome.new_faction, "Azul");
        let beta = registry.get(2).unwrap();
        assert_eq!(beta.faction, "Azul");
        assert_eq!(beta.troops, 1);
    }

    #[test]
    fn test_same_faction_regarrison() {
        let mut registry = two_territories(("Azul", 2), ("Azul", 1));
        let outcome = resolve_with_roll(&mut registry, 1, 2, roll(3, 3)).unwrap();

        assert!(!outcome.ownership_changed);
        assert_eq!(outcome.troops_lost, 1);
        assert_eq!(registry.get(2).unwrap().troops, 1);
        assert_eq!(registry.get(2).unwrap().faction, "Azul");
    }

    #[test]
    fn test_empty_defender_taken_without_loss() {
        let mut registry = two_territories(("Vermelho", 2), ("Verde", 0));
        let outcome = resolve_with_roll(&mut registry, 1, 2, roll(1, 1)).unwrap();

        assert_eq!(outcome.troops_lost, 0);
        assert!(outcome.ownership_changed);
        assert_eq!(registry.get(2).unwrap().troops, 1);
    }

    #[test]
    fn test_defender_win_mutates_nothing() {
        let mut registry = two_territories(("Azul", 3), ("Verde", 3));
        let before = registry.clone();
        let outcome = resolve_with_roll(&mut registry, 1, 2, roll(2, 5)).unwrap();

        assert!(!outcome.attacker_won());
        assert_eq!(outcome.troops_lost, 0);
        assert_eq!(outcome.new_faction, "Verde");
        for index in 1..=2 {
            assert_eq!(registry.get(index).unwrap(), before.get(index).unwrap());
        }
    }

    #[test]
    fn test_rejections() {
        let mut registry = two_territories(("Azul", 0), ("Verde", 3));

        assert!(matches!(
            resolve_with_roll(&mut registry, 0, 2, roll(6, 1)),
            Err(WarError::InvalidIndex { index: 0, .. })
        ));
        assert!(matches!(
            resolve_with_roll(&mut registry, 2, 3, roll(6, 1)),
            Err(WarError::InvalidIndex { index: 3, .. })
        ));
        assert!(matches!(
            resolve_with_roll(&mut registry, 2, 2, roll(6, 1)),
            Err(WarError::SelfAttack { index: 2 })
        ));
        assert!(matches!(
            resolve_with_roll(&mut registry, 1, 2, roll(6, 1)),
            Err(WarError::NoTroops { index: 1, .. })
        ));
        assert_eq!(registry.get(2).unwrap().troops, 3);
    }
}
