//! Read-only access to the Pokemon data provider.
//!
//! Every lookup is cached by its request URL. Failures never propagate as
//! transport errors: single-resource lookups return `DexError::NotFound`,
//! list lookups return an empty list.

use crate::core::transforms::SpeciesRef;
use crate::core::type_chart::{aggregate_effectiveness, DamageRelations, TypeEffectivenessMap};
use crate::data::cache::ReadThroughCache;
use crate::data::generations::Generation;
use crate::data::records::{
    EvolutionChainRecord, NamedResource, PokemonRecord, ResourceList, SpeciesRecord, TypeRecord,
};
use crate::error::{DexError, FetchError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Upper bound used to fetch every species name in one page.
pub const ALL_NAMES_LIMIT: u32 = 10_000;

/// Transport seam: GET a URL and return its JSON body.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get_json(&self, url: &str) -> std::result::Result<Value, FetchError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpFetch;

#[cfg(not(target_arch = "wasm32"))]
mod http {
    use super::Fetch;
    use crate::error::FetchError;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::time::Duration;

    /// `reqwest`-backed fetcher with a per-request timeout.
    pub struct HttpFetch {
        client: reqwest::Client,
    }

    impl HttpFetch {
        pub fn new(timeout: Duration) -> Result<Self, FetchError> {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl Fetch for HttpFetch {
        async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        }
    }
}

/// `" Mr Mime "` -> `"mr-mime"`
pub fn normalize_name(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

pub struct PokeApiClient<F> {
    fetcher: F,
    base_url: String,
    lists: ReadThroughCache<Vec<NamedResource>>,
    pokemon: ReadThroughCache<PokemonRecord>,
    species: ReadThroughCache<SpeciesRecord>,
    chains: ReadThroughCache<EvolutionChainRecord>,
    types: ReadThroughCache<DamageRelations>,
}

#[cfg(not(target_arch = "wasm32"))]
impl PokeApiClient<HttpFetch> {
    pub fn from_config(config: &crate::config::DexConfig) -> std::result::Result<Self, FetchError> {
        let fetcher = HttpFetch::new(config.http_timeout)?;
        Ok(Self::new(fetcher, &config.pokeapi_base_url))
    }
}

impl<F: Fetch> PokeApiClient<F> {
    pub fn new(fetcher: F, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            lists: ReadThroughCache::new(),
            pokemon: ReadThroughCache::new(),
            species: ReadThroughCache::new(),
            chains: ReadThroughCache::new(),
            types: ReadThroughCache::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One page of the species list, in dex order.
    pub async fn list_species(&self, limit: u32, offset: u32) -> Vec<SpeciesRef> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset);
        self.list(&url)
            .await
            .iter()
            .map(SpeciesRef::from)
            .collect()
    }

    pub async fn list_generation(&self, generation: &Generation) -> Vec<SpeciesRef> {
        self.list_species(generation.limit, generation.offset).await
    }

    /// Every species name, for search and autocomplete.
    pub async fn list_all_names(&self) -> Vec<String> {
        let url = format!("{}/pokemon?limit={}", self.base_url, ALL_NAMES_LIMIT);
        self.list(&url).await.iter().map(|r| r.name.clone()).collect()
    }

    pub async fn get_pokemon(&self, name_or_id: &str) -> Result<Arc<PokemonRecord>> {
        let key = normalize_name(name_or_id);
        if key.is_empty() {
            return Err(DexError::not_found("pokemon/"));
        }
        let url = format!("{}/pokemon/{}", self.base_url, key);
        self.pokemon
            .get_or_try_fetch(&url, || self.fetch_record(&url))
            .await
            .map_err(|err| lookup_failed(&url, err))
    }

    /// `reference` is the species URL embedded in a pokemon record, or a
    /// bare species id/name.
    pub async fn get_species(&self, reference: &str) -> Result<Arc<SpeciesRecord>> {
        let url = self.resolve_url("pokemon-species", reference);
        self.species
            .get_or_try_fetch(&url, || self.fetch_record(&url))
            .await
            .map_err(|err| lookup_failed(&url, err))
    }

    /// `reference` is the chain URL embedded in a species record, or a
    /// bare chain id.
    pub async fn get_evolution_chain(&self, reference: &str) -> Result<Arc<EvolutionChainRecord>> {
        let url = self.resolve_url("evolution-chain", reference);
        self.chains
            .get_or_try_fetch(&url, || self.fetch_record(&url))
            .await
            .map_err(|err| lookup_failed(&url, err))
    }

    pub async fn get_type_relations(&self, type_name: &str) -> Result<Arc<DamageRelations>> {
        let url = self.resolve_url("type", type_name);
        self.types
            .get_or_try_fetch(&url, || async {
                let record: TypeRecord = self.fetch_record(&url).await?;
                Ok::<_, FetchError>(DamageRelations::from(record.damage_relations))
            })
            .await
            .map_err(|err| lookup_failed(&url, err))
    }

    /// Defensive multipliers for a type combination, one provider call per
    /// type. Types whose lookup fails are left out of the product.
    pub async fn type_effectiveness<S: AsRef<str>>(&self, types: &[S]) -> TypeEffectivenessMap {
        let mut fetched: HashMap<String, Arc<DamageRelations>> = HashMap::new();
        for type_name in types {
            let type_name = type_name.as_ref();
            if let Ok(relations) = self.get_type_relations(type_name).await {
                fetched.insert(type_name.to_string(), relations);
            }
        }
        aggregate_effectiveness(types, |t| fetched.get(t).cloned())
    }

    pub fn clear_cache(&self) {
        self.lists.clear();
        self.pokemon.clear();
        self.species.clear();
        self.chains.clear();
        self.types.clear();
    }

    async fn list(&self, url: &str) -> Arc<Vec<NamedResource>> {
        let fetched = self
            .lists
            .get_or_try_fetch(url, || async {
                let list: ResourceList = self.fetch_record(url).await?;
                Ok::<_, FetchError>(list.results)
            })
            .await;
        match fetched {
            Ok(list) => list,
            Err(err) => {
                warn!(url, error = %err, "species list unavailable");
                Arc::new(Vec::new())
            }
        }
    }

    async fn fetch_record<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, FetchError> {
        debug!(url, "GET");
        let value = self.fetcher.get_json(url).await?;
        Ok(serde_json::from_value(value)?)
    }

    fn resolve_url(&self, endpoint: &str, reference: &str) -> String {
        let reference = reference.trim();
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.trim_end_matches('/').to_string()
        } else {
            format!("{}/{}/{}", self.base_url, endpoint, normalize_name(reference))
        }
    }
}

fn lookup_failed(url: &str, err: FetchError) -> DexError {
    warn!(url, error = %err, "provider lookup failed");
    let resource = url
        .split("/api/v2/")
        .nth(1)
        .unwrap_or(url)
        .to_string();
    DexError::NotFound { resource }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name(" Mr  Mime "), "mr-mime");
        assert_eq!(normalize_name("PIKACHU"), "pikachu");
        assert_eq!(normalize_name("25"), "25");
    }

    #[test]
    fn test_lookup_failed_trims_base() {
        let err = lookup_failed(
            "https://pokeapi.co/api/v2/pokemon/missingno",
            FetchError::Status {
                url: String::new(),
                status: 404,
            },
        );
        assert_eq!(err, DexError::not_found("pokemon/missingno"));
    }
}
