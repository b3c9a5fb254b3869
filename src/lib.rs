pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod tools;

pub use crate::config::{AiConfig, DexConfig};
pub use crate::core::{
    detail::{load_detail, DetailView},
    factory::{create_loadout, CreateLoadoutOptions, PokemonLoadout},
    navigation::{NavEvent, NavState, Screen},
    stats::{
        calc_stat, compute_all_real_stats, compute_real_stat, BaseStats, EffortValues, RealStats,
        StatName, StatTable, BATTLE_LEVEL, MAX_IV,
    },
    transforms::{
        compute_gender_ratio, extract_abilities, extract_description, flatten_evolution_chain,
        Abilities, GenderRatio, SpeciesRef,
    },
    type_chart::{aggregate_effectiveness, DamageRelations, EffectivenessSummary, TypeChart, TypeEffectivenessMap},
};
pub use crate::data::{
    client::{Fetch, PokeApiClient},
    items::ItemCatalog,
    natures::{Nature, NatureDatabase},
};
pub use crate::error::{AiError, DexError, Result};
pub use crate::tools::{
    analyzer::{render_outcome, MatchupAnalyzer, PokemonChatbot},
    messages::{ChatMessage, TextGenerator},
    prompt::MatchupSide,
};

#[cfg(target_arch = "wasm32")]
pub mod wasm;
