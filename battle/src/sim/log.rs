//! Human-readable battle log

use crate::types::Status;

/// Append-only event log. Lines are presentation-ready text; the engine
/// never parses them back.
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    entries: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<name> is paralyzed and can't move!`
    pub fn paralyzed(&mut self, name: &str) {
        self.entries
            .push(format!("{} is paralyzed and can't move!", name));
    }

    /// `<attacker> used a move and dealt <damage> damage to <defender> (<hp> HP left)`
    pub fn attack(&mut self, attacker: &str, damage: i64, defender: &str, hp_left: i64) {
        self.entries.push(format!(
            "{} used a move and dealt {} damage to {} ({} HP left)",
            attacker, damage, defender, hp_left
        ));
    }

    /// `<name> took <damage> poison damage! (<hp> HP left)`
    pub fn poison_damage(&mut self, name: &str, damage: i64, hp_left: i64) {
        self.entries.push(format!(
            "{} took {} poison damage! ({} HP left)",
            name, damage, hp_left
        ));
    }

    /// `<name> is now affected by <status>!`
    pub fn status_inflicted(&mut self, name: &str, status: Status) {
        self.entries
            .push(format!("{} is now affected by {}!", name, status));
    }

    /// Closing line when the round cap ends a battle with both sides standing
    pub fn stalemate(&mut self, rounds: u32) {
        self.entries.push(format!(
            "The battle was called after {} rounds with both Pokemon still standing!",
            rounds
        ));
    }

    /// Lines in the order they were recorded
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the log, yielding the raw lines
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
