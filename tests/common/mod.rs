#![allow(dead_code)]

use async_trait::async_trait;
use pokedex_rust::data::client::{Fetch, PokeApiClient};
use pokedex_rust::data::records::PokemonRecord;
use pokedex_rust::error::{AiError, FetchError};
use pokedex_rust::tools::messages::{ChatMessage, GenerationParams, TextGenerator};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const BASE: &str = "https://pokeapi.test/api/v2";

/// In-memory provider: URL -> JSON body. Unknown URLs answer 404.
#[derive(Clone, Default)]
pub struct FakeFetch {
    responses: Arc<Mutex<HashMap<String, Value>>>,
    calls: Arc<AtomicUsize>,
}

impl FakeFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, path: &str, body: Value) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&self, path: &str, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(format!("{}/{}", BASE, path), body);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch for FakeFetch {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

pub fn client(fetch: &FakeFetch) -> PokeApiClient<FakeFetch> {
    PokeApiClient::new(fetch.clone(), BASE)
}

/// Records every request and answers with a canned result. Clones share
/// the request log.
#[derive(Clone)]
pub struct FakeGenerator {
    pub reply: Result<String, AiError>,
    pub seen: Arc<Mutex<Vec<(Vec<ChatMessage>, GenerationParams)>>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: AiError) -> Self {
        Self {
            reply: Err(err),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<(Vec<ChatMessage>, GenerationParams)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn complete(&self, messages: &[ChatMessage], params: GenerationParams) -> Result<String, AiError> {
        self.seen.lock().unwrap().push((messages.to_vec(), params));
        self.reply.clone()
    }
}

pub fn named(kind: &str, name: &str, id: u32) -> Value {
    json!({ "name": name, "url": format!("{}/{}/{}/", BASE, kind, id) })
}

pub fn type_relations(double: &[&str], half: &[&str], none: &[&str]) -> Value {
    let refs = |names: &[&str]| -> Vec<Value> {
        names.iter().map(|n| json!({ "name": n, "url": "" })).collect()
    };
    json!({
        "name": "",
        "damage_relations": {
            "double_damage_from": refs(double),
            "half_damage_from": refs(half),
            "no_damage_from": refs(none),
        }
    })
}

pub fn charizard_json() -> Value {
    json!({
        "id": 6,
        "name": "charizard",
        "height": 17,
        "weight": 905,
        "types": [
            { "slot": 2, "type": { "name": "flying", "url": "" } },
            { "slot": 1, "type": { "name": "fire", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "blaze", "url": "" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "solar-power", "url": "" }, "is_hidden": true, "slot": 3 }
        ],
        "stats": [
            { "base_stat": 78, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 84, "effort": 0, "stat": { "name": "attack", "url": "" } },
            { "base_stat": 78, "effort": 0, "stat": { "name": "defense", "url": "" } },
            { "base_stat": 109, "effort": 3, "stat": { "name": "special-attack", "url": "" } },
            { "base_stat": 85, "effort": 0, "stat": { "name": "special-defense", "url": "" } },
            { "base_stat": 100, "effort": 0, "stat": { "name": "speed", "url": "" } }
        ],
        "moves": [
            { "move": { "name": "flamethrower", "url": "" } },
            { "move": { "name": "air-slash", "url": "" } },
            { "move": { "name": "dragon-pulse", "url": "" } },
            { "move": { "name": "roost", "url": "" } },
            { "move": { "name": "earthquake", "url": "" } }
        ],
        "species": named("pokemon-species", "charizard", 6),
        "sprites": {
            "front_default": "https://sprites.test/6.png",
            "other": { "official-artwork": { "front_default": "https://art.test/6.png" } }
        }
    })
}

pub fn blastoise_json() -> Value {
    json!({
        "id": 9,
        "name": "blastoise",
        "types": [{ "slot": 1, "type": { "name": "water", "url": "" } }],
        "abilities": [{ "ability": { "name": "torrent", "url": "" }, "is_hidden": false, "slot": 1 }],
        "stats": [
            { "base_stat": 79, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 83, "stat": { "name": "attack", "url": "" } },
            { "base_stat": 100, "stat": { "name": "defense", "url": "" } },
            { "base_stat": 85, "stat": { "name": "special-attack", "url": "" } },
            { "base_stat": 105, "stat": { "name": "special-defense", "url": "" } },
            { "base_stat": 78, "stat": { "name": "speed", "url": "" } }
        ],
        "moves": [
            { "move": { "name": "surf", "url": "" } },
            { "move": { "name": "ice-beam", "url": "" } }
        ],
        "species": named("pokemon-species", "blastoise", 9)
    })
}

pub fn charizard_species_json() -> Value {
    json!({
        "id": 6,
        "name": "charizard",
        "gender_rate": 1,
        "capture_rate": 45,
        "base_happiness": 50,
        "flavor_text_entries": [
            { "flavor_text": "リザードンの説明", "language": { "name": "ja", "url": "" } },
            { "flavor_text": "Spits fire that\nis hot enough to\u{c}melt boulders.", "language": { "name": "en", "url": "" } }
        ],
        "varieties": [
            { "is_default": true, "pokemon": named("pokemon", "charizard", 6) },
            { "is_default": false, "pokemon": named("pokemon", "charizard-mega-x", 10034) },
            { "is_default": false, "pokemon": named("pokemon", "charizard-mega-y", 10035) }
        ],
        "evolution_chain": { "url": format!("{}/evolution-chain/2/", BASE) }
    })
}

pub fn charmander_chain_json() -> Value {
    json!({
        "id": 2,
        "chain": {
            "species": named("pokemon-species", "charmander", 4),
            "evolves_to": [{
                "species": named("pokemon-species", "charmeleon", 5),
                "evolves_to": [{
                    "species": named("pokemon-species", "charizard", 6),
                    "evolves_to": []
                }]
            }]
        }
    })
}

pub fn record(value: Value) -> PokemonRecord {
    serde_json::from_value(value).expect("valid pokemon fixture")
}
