//! PokeAPI data provider for the hitmon workspace.
//!
//! Resolves Pokemon names against [PokeAPI](https://pokeapi.co) in two
//! shapes: the slim [`PokemonRecord`] the battle engine fights with, and the
//! full [`PokemonProfile`] the lookup page renders (types, abilities, stats,
//! moves, evolution chain).
//!
//! Every fetch returns a typed [`DexError`]; a name that does not resolve
//! surfaces as [`DexError::NotFound`] before any battle runs.
//!
//! # Example
//!
//! ```no_run
//! use hitmon_dex::DexClient;
//!
//! # async fn lookup() -> Result<(), hitmon_dex::DexError> {
//! let dex = DexClient::new();
//! let record = dex.battle_record("Pikachu").await?;
//! println!("{} has {} base speed", record.name, record.speed);
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod error;
mod profile;

pub use hitmon_battle::PokemonRecord;

pub use client::{DexClient, POKEAPI_URL};
pub use error::DexError;
pub use profile::{BaseStats, PokemonProfile, PROFILE_MOVE_LIMIT};
