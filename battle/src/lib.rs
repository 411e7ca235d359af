//! Randomized Pokemon battle simulation.
//!
//! Given two resolved Pokemon records this crate runs a simplified
//! turn-based fight to completion: speed picks the opening attacker, every
//! move rolls a random power through the type-effectiveness chart, and
//! paralysis, burn, and poison tilt the odds until one side drops.
//!
//! # Overview
//!
//! `hitmon-battle` is the core of the workspace and does no I/O:
//!
//! ```text
//! hitmon-dex (PokeAPI records)
//!        │
//!        ▼
//! hitmon-battle (simulation) ← THIS CRATE
//!        │
//!        └─> hitmon (terminal front-end)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 canonical types and the curated effectiveness chart
//! - [`Status`] - paralysis, burn, and poison
//! - [`PokemonRecord`] - resolved stats the simulator consumes
//! - [`BattleRng`] - injectable randomness ([`SmallRngSource`] for real
//!   fights, [`ScriptedRng`] for tests)
//! - [`BattleOutcome`] - winner (or draw), event log, final statuses
//!
//! # Example
//!
//! ```
//! use hitmon_battle::{simulate, PokemonRecord, Type};
//!
//! let pikachu = PokemonRecord::new("pikachu", 35, 55, 40, 90, Type::Electric);
//! let squirtle = PokemonRecord::new("squirtle", 44, 48, 65, 43, Type::Water);
//!
//! let outcome = simulate(&pikachu, &squirtle)?;
//! match outcome.winner {
//!     Some(name) => println!("{} wins!", name),
//!     None => println!("It's a draw!"),
//! }
//! # Ok::<(), hitmon_battle::BattleError>(())
//! ```

use thiserror::Error;

pub mod sim;
pub mod types;

// Re-export main types at crate root for convenience
pub use sim::{
    move_damage, simulate, simulate_with, BattleLog, BattleOutcome, BattleRng, BattleRules,
    Combatant, ScriptedRng, SmallRngSource,
};
pub use types::{PokemonRecord, Status, Type};

#[derive(Error, Debug)]
pub enum BattleError {
    /// A record carries a zero where the damage formula needs a positive
    /// stat, so the battle never starts.
    #[error("Invalid record for {name}: {stat} must be positive")]
    InvalidStat { name: String, stat: &'static str },
}
