//! Status conditions inflicted during battle

/// Status conditions. Each combatant picks up at most one per battle and
/// keeps it until the fight ends; nothing cures or replaces a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// 25% chance to lose each turn
    Paralysis,
    /// Effective attack halved (integer division)
    Burn,
    /// Loses 5% of current HP after every hit taken
    Poison,
}

impl Status {
    /// All conditions an affliction roll can land on, in roll order
    pub const ALL: [Status; 3] = [Status::Paralysis, Status::Burn, Status::Poison];

    /// Lowercase name as it appears in battle log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Paralysis => "paralysis",
            Status::Burn => "burn",
            Status::Poison => "poison",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
