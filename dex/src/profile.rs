//! Full lookup-page view of a Pokemon

use serde::Serialize;

use crate::api::PokemonResponse;
use crate::error::DexError;

/// Moves listed on a profile are capped at the first few the API returns;
/// full movepools run into the hundreds.
pub const PROFILE_MOVE_LIMIT: usize = 10;

/// All six base stats, as the lookup page shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

/// Everything the lookup page shows about one Pokemon.
///
/// Unlike [`hitmon_battle::PokemonRecord`] this keeps every type, not just
/// the one the battle engine fights with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonProfile {
    pub name: String,
    /// Type names in slot order
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: BaseStats,
    /// First [`PROFILE_MOVE_LIMIT`] moves
    pub moves: Vec<String>,
    /// Species names down the evolution chain, first branch only
    pub evolution: Vec<String>,
}

impl PokemonProfile {
    /// Assemble a profile from a parsed `/pokemon/{name}` response and an
    /// already-walked evolution chain.
    pub fn from_api(pokemon: &PokemonResponse, evolution: Vec<String>) -> Result<Self, DexError> {
        Ok(Self {
            name: pokemon.name.clone(),
            types: pokemon.type_names(),
            abilities: pokemon
                .abilities
                .iter()
                .map(|slot| slot.ability.name.clone())
                .collect(),
            stats: BaseStats {
                hp: pokemon.base_stat("hp")?,
                attack: pokemon.base_stat("attack")?,
                defense: pokemon.base_stat("defense")?,
                special_attack: pokemon.base_stat("special-attack")?,
                special_defense: pokemon.base_stat("special-defense")?,
                speed: pokemon.base_stat("speed")?,
            },
            moves: pokemon
                .moves
                .iter()
                .take(PROFILE_MOVE_LIMIT)
                .map(|slot| slot.learned.name.clone())
                .collect(),
            evolution,
        })
    }
}
