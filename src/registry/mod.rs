//! Territory registry
//!
//! Fixed-length, ordered collection of territories addressed by 1-based
//! index. The index is the territory's identity; the length never changes
//! after setup.

pub mod territory;

pub use territory::Territory;

use crate::core::config::{FACTION_PALETTE, MIN_STARTING_TROOPS, STARTING_TROOP_SPREAD};
use crate::core::error::{Result, WarError};
use crate::core::types::Faction;

#[derive(Clone, Debug, Default)]
pub struct Registry {
    territories: Vec<Territory>,
}

impl Registry {
    /// Allocate and populate `count` territories
    ///
    /// Names are numbered sequentially, factions cycle through the palette
    /// and starting troops cycle through 3..=5.
    pub fn initialize(count: usize) -> Result<Self> {
        let mut territories = Vec::new();
        territories
            .try_reserve_exact(count)
            .map_err(|_| WarError::Allocation { count })?;

        for i in 0..count {
            let faction = FACTION_PALETTE[i % FACTION_PALETTE.len()];
            let troops = MIN_STARTING_TROOPS + (i as u32 % STARTING_TROOP_SPREAD);
            territories.push(Territory::new(&format!("Territory_{}", i + 1), faction, troops)?);
        }

        tracing::info!("Initialized {} territories", count);
        Ok(Self { territories })
    }

    /// Build a registry from explicit territories (scenarios and tests)
    pub fn from_territories(territories: Vec<Territory>) -> Self {
        Self { territories }
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Map a 1-based index to a slot, rejecting anything outside 1..=len
    pub fn check_index(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.territories.len() {
            return Err(WarError::InvalidIndex {
                index,
                count: self.territories.len(),
            });
        }
        Ok(index - 1)
    }

    pub fn get(&self, index: usize) -> Result<&Territory> {
        let slot = self.check_index(index)?;
        Ok(&self.territories[slot])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Territory> {
        let slot = self.check_index(index)?;
        Ok(&mut self.territories[slot])
    }

    /// Iterate territories paired with their 1-based index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Territory)> {
        self.territories.iter().enumerate().map(|(i, t)| (i + 1, t))
    }

    pub fn count_owned_by(&self, faction: &Faction) -> usize {
        self.territories.iter().filter(|t| t.is_owned_by(faction)).count()
    }

    pub fn owns_any(&self, faction: &Faction) -> bool {
        self.territories.iter().any(|t| t.is_owned_by(faction))
    }

    /// Release all territories. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.territories.capacity() == 0 {
            return;
        }
        let released = std::mem::take(&mut self.territories).len();
        tracing::info!("Released {} territories", released);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_five() {
        let registry = Registry::initialize(5).unwrap();
        assert_eq!(registry.len(), 5);

        let factions: Vec<&str> = registry.iter().map(|(_, t)| t.faction.as_str()).collect();
        assert_eq!(factions, ["Azul", "Vermelho", "Verde", "Azul", "Vermelho"]);

        let troops: Vec<u32> = registry.iter().map(|(_, t)| t.troops).collect();
        assert_eq!(troops, [3, 4, 5, 3, 4]);

        assert_eq!(registry.get(1).unwrap().name, "Territory_1");
        assert_eq!(registry.get(5).unwrap().name, "Territory_5");
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let registry = Registry::initialize(5).unwrap();
        assert!(matches!(
            registry.get(0),
            Err(WarError::InvalidIndex { index: 0, count: 5 })
        ));
        assert!(matches!(
            registry.get(6),
            Err(WarError::InvalidIndex { index: 6, count: 5 })
        ));
    }

    #[test]
    fn test_ownership_queries() {
        let registry = Registry::initialize(5).unwrap();
        let azul = Faction::new("Azul").unwrap();
        let verde = Faction::new("Verde").unwrap();
        assert_eq!(registry.count_owned_by(&azul), 2);
        assert_eq!(registry.count_owned_by(&verde), 1);
        assert!(registry.owns_any(&verde));
    }

    #[test]
    fn test_allocation_failure_is_reported() {
        assert!(matches!(
            Registry::initialize(usize::MAX),
            Err(WarError::Allocation { count: usize::MAX })
        ));
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut registry = Registry::initialize(5).unwrap();
        registry.teardown();
        assert!(registry.is_empty());
        registry.teardown();
        assert!(registry.is_empty());
        assert!(registry.get(1).is_err());
    }

    #[test]
    fn test_teardown_never_allocated() {
        let mut registry = Registry::default();
        registry.teardown();
        assert_eq!(registry.len(), 0);
    }
}
