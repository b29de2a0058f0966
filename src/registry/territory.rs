//! Territory - a named piece of the map held by one faction

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Faction, TerritoryName};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: TerritoryName,
    /// Owner, also the army color
    pub faction: Faction,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: &str, faction: &str, troops: u32) -> Result<Self> {
        Ok(Self {
            name: TerritoryName::new(name)?,
            faction: Faction::new(faction)?,
            troops,
        })
    }

    pub fn is_owned_by(&self, faction: &Faction) -> bool {
        &self.faction == faction
    }
}
