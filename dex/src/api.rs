//! PokeAPI wire types
//!
//! These structs mirror the subset of the PokeAPI JSON the workspace reads:
//! `/pokemon/{name}`, `/pokemon-species/{name}`, and the evolution chain the
//! species points at. Everything else in the responses is ignored.

use hitmon_battle::{PokemonRecord, Type};
use serde::Deserialize;

use crate::error::DexError;

/// A `{"name": ...}` reference, the building block of most PokeAPI lists
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// A bare `{"url": ...}` reference
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlResource {
    pub url: String,
}

/// One entry of the `stats` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One entry of the `types` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One entry of the `abilities` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

/// One entry of the `moves` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub learned: NamedResource,
}

/// Response body of `GET /pokemon/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    pub stats: Vec<StatSlot>,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

impl PokemonResponse {
    /// Base stat by its PokeAPI name (`hp`, `attack`, `special-defense`, ...)
    pub fn base_stat(&self, stat: &'static str) -> Result<u32, DexError> {
        self.stats
            .iter()
            .find(|slot| slot.stat.name == stat)
            .map(|slot| slot.base_stat)
            .ok_or_else(|| DexError::MissingStat {
                name: self.name.clone(),
                stat,
            })
    }

    /// Type names in slot order
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|slot| slot.kind.name.clone()).collect()
    }

    /// First listed type, parsed into the canonical enum. Secondary types
    /// never reach the battle engine.
    pub fn primary_type(&self) -> Result<Type, DexError> {
        let first = self.types.first().ok_or_else(|| DexError::MissingType {
            name: self.name.clone(),
        })?;
        Type::from_name(&first.kind.name)
            .ok_or_else(|| DexError::UnknownType(first.kind.name.clone()))
    }

    /// Project this response into the record the battle engine consumes
    pub fn battle_record(&self) -> Result<PokemonRecord, DexError> {
        Ok(PokemonRecord::new(
            self.name.clone(),
            self.base_stat("hp")?,
            self.base_stat("attack")?,
            self.base_stat("defense")?,
            self.base_stat("speed")?,
            self.primary_type()?,
        ))
    }
}

/// Response body of `GET /pokemon-species/{name}`, reduced to the evolution
/// chain pointer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesResponse {
    pub evolution_chain: UrlResource,
}

/// Response body of an evolution chain fetch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EvolutionChainResponse {
    pub chain: ChainLink,
}

/// One link of an evolution chain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// Species names down the chain, first branch only. Eevee-style splits
    /// contribute just their first listed evolution.
    pub fn first_branch_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut link = self;
        loop {
            names.push(link.species.name.clone());
            match link.evolves_to.first() {
                Some(next) => link = next,
                None => break,
            }
        }
        names
    }
}
