//! Damage formula

use super::combatant::Combatant;

/// Damage dealt by a single move:
///
/// `floor(((2 * effectiveAttack / defense) * movePower / 50 + 2) * multiplier)`
///
/// Division is real-valued throughout; only the final result is floored. The
/// result is never negative, and a type immunity zeroes it outright.
pub fn move_damage(attacker: &Combatant, defender: &Combatant, move_power: u32) -> i64 {
    let effective_attack = f64::from(attacker.effective_attack());
    let defense = f64::from(defender.defense);
    let multiplier = attacker.primary_type.multiplier(defender.primary_type);

    let raw = (2.0 * effective_attack / defense) * f64::from(move_power) / 50.0 + 2.0;
    (raw * multiplier).floor() as i64
}
