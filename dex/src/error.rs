use thiserror::Error;

/// Everything that can go wrong between a Pokemon name and a usable record.
#[derive(Error, Debug)]
pub enum DexError {
    /// PokeAPI answered 404; the name does not resolve to a Pokemon.
    #[error("No Pokemon named '{0}' was found")]
    NotFound(String),

    /// PokeAPI answered with a non-success status other than 404.
    #[error("PokeAPI returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The request never completed (DNS, TLS, timeout, connection reset).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expect.
    #[error("Failed to decode PokeAPI response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The stats array came back without a stat the battle engine needs.
    #[error("Response for '{name}' is missing the '{stat}' base stat")]
    MissingStat { name: String, stat: &'static str },

    /// The types array came back empty.
    #[error("Response for '{name}' lists no types")]
    MissingType { name: String },

    /// The first listed type is not one of the 18 canonical types.
    #[error("Unknown type name '{0}'")]
    UnknownType(String),
}
