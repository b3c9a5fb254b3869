//! Typed provider payloads.
//!
//! Only the fields the app reads are modelled. Every place where the
//! provider may omit a value or send `null` is an `Option` or a
//! `#[serde(default)]`, so a sparse payload still decodes.

use crate::core::stats::{BaseStats, StatName};
use serde::{Deserialize, Serialize};

/// `{ name, url }` reference to another provider resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Numeric id taken from the trailing path segment of the URL.
    pub fn id(&self) -> Option<u32> {
        resource_id(&self.url)
    }
}

/// `https://pokeapi.co/api/v2/pokemon-species/25/` -> `Some(25)`
pub fn resource_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    #[serde(default)]
    pub height: Option<u32>,
    /// Hectograms.
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilitySlot>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub moves: Vec<PokemonMoveEntry>,
    pub species: NamedResource,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub cries: Option<Cries>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonMoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: SpriteVariant,
    #[serde(default)]
    pub showdown: SpriteVariant,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpriteVariant {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cries {
    #[serde(default)]
    pub latest: Option<String>,
    #[serde(default)]
    pub legacy: Option<String>,
}

impl PokemonRecord {
    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.type_ref.name.clone()).collect()
    }

    pub fn ability_names(&self) -> Vec<String> {
        self.abilities.iter().map(|a| a.ability.name.clone()).collect()
    }

    pub fn move_names(&self) -> Vec<String> {
        self.moves.iter().map(|m| m.move_ref.name.clone()).collect()
    }

    pub fn can_learn(&self, move_name: &str) -> bool {
        self.moves.iter().any(|m| m.move_ref.name == move_name)
    }

    pub fn base_stat(&self, stat: StatName) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == stat.as_str())
            .map(|s| s.base_stat)
    }

    /// All six base stats, or `None` when the record lacks any of them.
    pub fn base_stats(&self) -> Option<BaseStats> {
        let mut table = BaseStats::default();
        for stat in StatName::ALL {
            table.set(stat, self.base_stat(stat)?);
        }
        Some(table)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,
    /// Female ratio in eighths; -1 means genderless.
    #[serde(default = "genderless_rate")]
    pub gender_rate: i32,
    #[serde(default)]
    pub capture_rate: Option<u32>,
    #[serde(default)]
    pub base_happiness: Option<u32>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    #[serde(default)]
    pub varieties: Vec<Variety>,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
}

fn genderless_rate() -> i32 {
    -1
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Variety {
    #[serde(default)]
    pub is_default: bool,
    pub pokemon: NamedResource,
}

/// Unnamed `{ url }` reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionChainRecord {
    #[serde(default)]
    pub id: u32,
    pub chain: EvolutionNode,
}

/// One stage of an evolution tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    pub damage_relations: DamageRelationsRecord,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DamageRelationsRecord {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}
