//! Battle simulation: combatant state, randomness, and the round loop

mod battle;
mod combatant;
mod damage;
mod log;
mod rng;

pub use battle::{simulate, simulate_with, BattleOutcome, BattleRules};
pub use combatant::Combatant;
pub use damage::move_damage;
pub use log::BattleLog;
pub use rng::{BattleRng, ScriptedRng, SmallRngSource};
