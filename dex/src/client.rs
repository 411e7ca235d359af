//! The PokeAPI client

use hitmon_battle::PokemonRecord;
use serde::de::DeserializeOwned;

use crate::api::{EvolutionChainResponse, PokemonResponse, SpeciesResponse};
use crate::error::DexError;
use crate::profile::PokemonProfile;

/// Public PokeAPI endpoint
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Resolves Pokemon names against PokeAPI.
///
/// One client owns one connection-pooling [`reqwest::Client`]; clone the
/// `DexClient` rather than constructing a second one.
#[derive(Debug, Clone)]
pub struct DexClient {
    http: reqwest::Client,
    base_url: String,
}

impl DexClient {
    /// Client against the public PokeAPI endpoint
    pub fn new() -> Self {
        Self::with_base_url(POKEAPI_URL)
    }

    /// Client against a different endpoint (a mirror or a test server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a name into the record the battle engine consumes: hp,
    /// attack, defense, speed, and the first listed type.
    pub async fn battle_record(&self, name: &str) -> Result<PokemonRecord, DexError> {
        let name = normalize(name);
        let pokemon: PokemonResponse = self
            .fetch(&format!("{}/pokemon/{}", self.base_url, name), &name)
            .await?;
        pokemon.battle_record()
    }

    /// Resolve a name into the full lookup-page profile: all types,
    /// abilities, six base stats, the first moves, and the evolution chain.
    pub async fn profile(&self, name: &str) -> Result<PokemonProfile, DexError> {
        let name = normalize(name);
        let pokemon: PokemonResponse = self
            .fetch(&format!("{}/pokemon/{}", self.base_url, name), &name)
            .await?;
        let species: SpeciesResponse = self
            .fetch(&format!("{}/pokemon-species/{}", self.base_url, name), &name)
            .await?;
        let evolution = self
            .evolution_chain(&species.evolution_chain.url, &name)
            .await?;
        PokemonProfile::from_api(&pokemon, evolution)
    }

    /// Walk the evolution chain at `url`, first branch only
    async fn evolution_chain(&self, url: &str, name: &str) -> Result<Vec<String>, DexError> {
        let chain: EvolutionChainResponse = self.fetch(url, name).await?;
        Ok(chain.chain.first_branch_names())
    }

    /// GET `url` and decode the JSON body, mapping 404 onto the name being
    /// looked up.
    async fn fetch<T: DeserializeOwned>(&self, url: &str, name: &str) -> Result<T, DexError> {
        tracing::debug!(url = %url, "Fetching from PokeAPI");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!(name = %name, url = %url, "Pokemon not found");
            return Err(DexError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "PokeAPI request failed");
            return Err(DexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for DexClient {
    fn default() -> Self {
        Self::new()
    }
}

/// PokeAPI paths are lowercase; user-typed names arrive in any shape.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
