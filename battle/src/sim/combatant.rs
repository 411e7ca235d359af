//! Per-battle combatant state

use crate::types::{PokemonRecord, Status, Type};

/// One side's mutable state for a single battle, built fresh from a record
/// when the fight starts and discarded when it ends.
#[derive(Debug, Clone)]
pub struct Combatant {
    /// Identifier carried into log lines and the final status map
    pub name: String,

    // === HP ===
    /// Signed so a finishing blow can leave negative HP in the log
    pub hp: i64,

    // === Immutable stats ===
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub primary_type: Type,

    // === Status ===
    /// Set at most once per battle, never cleared
    pub status: Option<Status>,
}

impl Combatant {
    /// Fresh battle state from a resolved record
    pub fn from_record(record: &PokemonRecord) -> Self {
        Self {
            name: record.name.clone(),
            hp: i64::from(record.hp),
            attack: record.attack,
            defense: record.defense,
            speed: record.speed,
            primary_type: record.primary_type,
            status: None,
        }
    }

    /// Attack stat after status modifiers: burn halves it, rounding down
    pub fn effective_attack(&self) -> u32 {
        match self.status {
            Some(Status::Burn) => self.attack / 2,
            _ => self.attack,
        }
    }

    /// Whether this combatant is out of the fight
    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }
}
