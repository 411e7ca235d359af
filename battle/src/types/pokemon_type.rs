//! Pokemon type system and effectiveness chart

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Damage multiplier against a single defending type.
    ///
    /// The chart is hand-curated and asymmetric: pairs it does not list are
    /// neutral (1.0). Listed values are 2.0 (super effective), 0.5 (not very
    /// effective), or 0.0 (immune).
    pub fn multiplier(&self, defender: Type) -> f64 {
        match (*self, defender) {
            // Fire attacking
            (Type::Fire, Type::Grass) => 2.0,
            (Type::Fire, Type::Water | Type::Fire) => 0.5,

            // Water attacking
            (Type::Water, Type::Fire) => 2.0,
            (Type::Water, Type::Grass | Type::Water) => 0.5,

            // Grass attacking
            (Type::Grass, Type::Water) => 2.0,
            (Type::Grass, Type::Fire | Type::Grass) => 0.5,

            // Electric attacking
            (Type::Electric, Type::Water | Type::Flying) => 2.0,
            (Type::Electric, Type::Grass) => 0.5,
            (Type::Electric, Type::Ground) => 0.0,

            // Normal attacking
            (Type::Normal, Type::Rock) => 0.5,
            (Type::Normal, Type::Ghost) => 0.0,

            // Fighting attacking
            (
                Type::Fighting,
                Type::Normal | Type::Rock | Type::Ice | Type::Dark | Type::Steel,
            ) => 2.0,
            (
                Type::Fighting,
                Type::Flying | Type::Poison | Type::Bug | Type::Psychic,
            ) => 0.5,
            (Type::Fighting, Type::Ghost) => 0.0,

            // Flying attacking
            (Type::Flying, Type::Grass | Type::Fighting | Type::Bug) => 2.0,
            (Type::Flying, Type::Electric | Type::Rock | Type::Steel) => 0.5,

            // Poison attacking
            (Type::Poison, Type::Grass | Type::Fairy) => 2.0,
            (
                Type::Poison,
                Type::Poison | Type::Ground | Type::Rock | Type::Ghost,
            ) => 0.5,

            // Ground attacking
            (
                Type::Ground,
                Type::Fire | Type::Electric | Type::Poison | Type::Rock | Type::Steel,
            ) => 2.0,
            (Type::Ground, Type::Grass | Type::Bug) => 0.5,
            (Type::Ground, Type::Flying) => 0.0,

            // Rock attacking
            (Type::Rock, Type::Fire | Type::Ice | Type::Flying | Type::Bug) => 2.0,
            (Type::Rock, Type::Fighting | Type::Ground | Type::Steel) => 0.5,

            // Bug attacking
            (Type::Bug, Type::Grass | Type::Psychic | Type::Dark) => 2.0,
            (
                Type::Bug,
                Type::Fire
                | Type::Fighting
                | Type::Poison
                | Type::Flying
                | Type::Ghost
                | Type::Steel,
            ) => 0.5,

            // Ghost attacking
            (Type::Ghost, Type::Ghost | Type::Psychic) => 2.0,
            (Type::Ghost, Type::Dark) => 0.5,
            (Type::Ghost, Type::Normal) => 0.0,

            // Steel attacking
            (Type::Steel, Type::Ice | Type::Rock | Type::Fairy) => 2.0,
            (
                Type::Steel,
                Type::Fire | Type::Water | Type::Electric | Type::Steel,
            ) => 0.5,

            // Psychic attacking
            (Type::Psychic, Type::Fighting | Type::Poison) => 2.0,
            (Type::Psychic, Type::Steel | Type::Psychic) => 0.5,
            (Type::Psychic, Type::Dark) => 0.0,

            // Ice attacking
            (
                Type::Ice,
                Type::Grass | Type::Ground | Type::Flying | Type::Dragon,
            ) => 2.0,
            (
                Type::Ice,
                Type::Fire | Type::Water | Type::Ice | Type::Steel,
            ) => 0.5,

            // Dragon attacking
            (Type::Dragon, Type::Dragon) => 2.0,
            (Type::Dragon, Type::Steel) => 0.5,
            (Type::Dragon, Type::Fairy) => 0.0,

            // Dark attacking
            (Type::Dark, Type::Psychic | Type::Ghost) => 2.0,
            (Type::Dark, Type::Fighting | Type::Dark | Type::Fairy) => 0.5,

            // Fairy attacking
            (Type::Fairy, Type::Fighting | Type::Dragon | Type::Dark) => 2.0,
            (Type::Fairy, Type::Fire | Type::Poison | Type::Steel) => 0.5,

            // Everything else is neutral
            _ => 1.0,
        }
    }

    /// Parse from an API type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
