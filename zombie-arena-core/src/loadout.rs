use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::weapon::{Magazine, Weapon};

/// One weapon described as data.
#[derive(Clone, Debug, Deserialize)]
pub struct WeaponDef {
    pub name: String,
    pub magazine_capacity: u32,
    pub stock_rounds: u32,
    pub base_damage_per_round: f32,
    pub sprite: String,
}

impl WeaponDef {
    /// Assembles a ready-to-carry weapon with a full magazine.
    pub fn build(&self) -> Weapon {
        Weapon::new(
            Magazine::full(self.magazine_capacity),
            self.stock_rounds,
            self.base_damage_per_round,
            self.sprite.clone(),
        )
    }
}

#[derive(Debug, Error)]
pub enum LoadoutError {
    #[error("malformed loadout JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weapon {0:?} has a zero-capacity magazine")]
    ZeroCapacity(String),
    #[error("weapon {0:?} has a non-positive base damage")]
    NonPositiveDamage(String),
    #[error("duplicate weapon name {0:?}")]
    DuplicateName(String),
}

/// The set of weapon definitions available to a run. Parsing is IO-free; the
/// caller owns reading the text from wherever it lives.
#[derive(Clone, Debug, Deserialize)]
pub struct Loadout {
    pub weapons: Vec<WeaponDef>,
}

impl Loadout {
    pub fn from_json(text: &str) -> Result<Loadout, LoadoutError> {
        let loadout: Loadout = serde_json::from_str(text)?;
        loadout.validate()?;
        Ok(loadout)
    }

    pub fn get(&self, name: &str) -> Option<&WeaponDef> {
        self.weapons.iter().find(|def| def.name == name)
    }

    fn validate(&self) -> Result<(), LoadoutError> {
        let mut seen = HashSet::new();
        for def in &self.weapons {
            if def.magazine_capacity == 0 {
                return Err(LoadoutError::ZeroCapacity(def.name.clone()));
            }
            if !(def.base_damage_per_round > 0.0) || !def.base_damage_per_round.is_finite() {
                return Err(LoadoutError::NonPositiveDamage(def.name.clone()));
            }
            if !seen.insert(def.name.as_str()) {
                return Err(LoadoutError::DuplicateName(def.name.clone()));
            }
        }
        Ok(())
    }
}
