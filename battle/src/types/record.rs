//! Resolved Pokemon battle records

use crate::BattleError;

use super::pokemon_type::Type;

/// A Pokemon reduced to the stats and single type the simulator uses.
///
/// Records arrive fully resolved (from the data provider or straight from a
/// test); the engine validates the numeric stats before any turn runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokemonRecord {
    /// Species name, used as the combatant identifier in logs and results
    pub name: String,

    /// Base HP stat
    pub hp: u32,

    /// Base Attack stat
    pub attack: u32,

    /// Base Defense stat
    pub defense: u32,

    /// Base Speed stat (zero is legal; it just never wins the speed check)
    pub speed: u32,

    /// First listed type; secondary types do not participate in combat
    pub primary_type: Type,
}

impl PokemonRecord {
    /// Create a record from explicit stats
    pub fn new(
        name: impl Into<String>,
        hp: u32,
        attack: u32,
        defense: u32,
        speed: u32,
        primary_type: Type,
    ) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            defense,
            speed,
            primary_type,
        }
    }

    /// Check the stats the damage formula divides by or drains, rejecting
    /// zeroes before they can produce a nonsense battle
    pub fn validate(&self) -> Result<(), BattleError> {
        for (stat, value) in [("hp", self.hp), ("attack", self.attack), ("defense", self.defense)]
        {
            if value == 0 {
                return Err(BattleError::InvalidStat {
                    name: self.name.clone(),
                    stat,
                });
            }
        }
        Ok(())
    }
}
