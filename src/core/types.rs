//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WarError};

/// Longest territory name accepted
pub const TERRITORY_NAME_MAX: usize = 29;

/// Longest faction (army color) name accepted
pub const FACTION_NAME_MAX: usize = 9;

/// Owned string with a hard upper bound on its length (in characters)
///
/// Construction fails instead of truncating, so a value of this type always
/// satisfies the bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedName<const MAX: usize>(String);

impl<const MAX: usize> BoundedName<MAX> {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(WarError::EmptyName);
        }
        if value.chars().count() > MAX {
            return Err(WarError::NameTooLong { value, max: MAX });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const MAX: usize> TryFrom<String> for BoundedName<MAX> {
    type Error = WarError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl<const MAX: usize> From<BoundedName<MAX>> for String {
    fn from(name: BoundedName<MAX>) -> Self {
        name.0
    }
}

impl<const MAX: usize> fmt::Display for BoundedName<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const MAX: usize> PartialEq<str> for BoundedName<MAX> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<const MAX: usize> PartialEq<&str> for BoundedName<MAX> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Display name of a territory
pub type TerritoryName = BoundedName<TERRITORY_NAME_MAX>;

/// Owning faction of a territory, doubling as its army color
pub type Faction = BoundedName<FACTION_NAME_MAX>;
