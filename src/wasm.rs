//! Browser bindings for the pure parts of the crate.
//!
//! The page does its own fetching; these functions take provider JSON and
//! return display-ready values.

use crate::core::factory::PokemonLoadout;
use crate::core::stats::{compute_all_real_stats, EffortValues, StatName, StatTable};
use crate::core::transforms::{extract_abilities, extract_description, flatten_evolution_chain, GenderRatio};
use crate::core::type_chart::{aggregate_effectiveness, DamageRelations, TypeChart};
use crate::data::items::ITEMS;
use crate::data::natures::NATURES;
use crate::data::records::{EvolutionNode, PokemonRecord, SpeciesRecord};
use crate::tools::prompt::{build_matchup_messages, MatchupSide};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

static TYPE_CHART: Lazy<TypeChart> = Lazy::new(TypeChart::standard);

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EvAdjustmentWire {
    evs: StatTable,
    applied: u32,
    remaining: u32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchupSideWire {
    loadout: PokemonLoadout,
    record: PokemonRecord,
}

fn js_err(message: impl ToString) -> JsValue {
    JsValue::from_str(&message.to_string())
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

#[wasm_bindgen(js_name = listNatures)]
pub fn list_natures_wasm() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(NATURES.all()).map_err(js_err)
}

#[wasm_bindgen(js_name = listItems)]
pub fn list_items_wasm() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&ITEMS.choices()).map_err(js_err)
}

#[wasm_bindgen(js_name = realStats)]
pub fn real_stats_wasm(base: JsValue, evs: JsValue, nature: String) -> Result<JsValue, JsValue> {
    let base: StatTable = serde_wasm_bindgen::from_value(base).map_err(js_err)?;
    let evs: EffortValues = if is_absent(&evs) {
        EffortValues::default()
    } else {
        let table: StatTable = serde_wasm_bindgen::from_value(evs).map_err(js_err)?;
        EffortValues::new(table).map_err(js_err)?
    };
    let nature = NATURES
        .get(&nature)
        .cloned()
        .ok_or_else(|| js_err(format!("Unknown nature: {}", nature)))?;
    serde_wasm_bindgen::to_value(&compute_all_real_stats(&base, &evs, &nature)).map_err(js_err)
}

/// Slider handler: returns the capped EV table and the value applied.
#[wasm_bindgen(js_name = adjustEv)]
pub fn adjust_ev_wasm(evs: JsValue, stat: String, requested: u32) -> Result<JsValue, JsValue> {
    let table: StatTable = if is_absent(&evs) {
        StatTable::default()
    } else {
        serde_wasm_bindgen::from_value(evs).map_err(js_err)?
    };
    let mut evs = EffortValues::new(table).map_err(js_err)?;
    let stat: StatName = stat.parse().map_err(js_err)?;
    let applied = evs.adjust(stat, requested);
    let wire = EvAdjustmentWire {
        evs: *evs.as_table(),
        applied,
        remaining: evs.remaining(),
    };
    serde_wasm_bindgen::to_value(&wire).map_err(js_err)
}

/// `relations` maps defending type -> damage relations; when absent the
/// bundled chart is used.
#[wasm_bindgen(js_name = typeEffectiveness)]
pub fn type_effectiveness_wasm(types: JsValue, relations: JsValue) -> Result<JsValue, JsValue> {
    let types: Vec<String> = serde_wasm_bindgen::from_value(types).map_err(js_err)?;
    let map = if is_absent(&relations) {
        TYPE_CHART.defensive_map(&types)
    } else {
        let relations: HashMap<String, DamageRelations> =
            serde_wasm_bindgen::from_value(relations).map_err(js_err)?;
        aggregate_effectiveness(&types, |t| relations.get(t))
    };
    serde_wasm_bindgen::to_value(&map.summarize()).map_err(js_err)
}

#[wasm_bindgen(js_name = flattenEvolutionChain)]
pub fn flatten_evolution_chain_wasm(chain: JsValue) -> Result<JsValue, JsValue> {
    let root: EvolutionNode = serde_wasm_bindgen::from_value(chain).map_err(js_err)?;
    serde_wasm_bindgen::to_value(&flatten_evolution_chain(&root)).map_err(js_err)
}

#[wasm_bindgen(js_name = speciesDescription)]
pub fn species_description_wasm(species: JsValue) -> Result<String, JsValue> {
    if is_absent(&species) {
        return Ok(extract_description(None));
    }
    let species: SpeciesRecord = serde_wasm_bindgen::from_value(species).map_err(js_err)?;
    Ok(extract_description(Some(&species)))
}

#[wasm_bindgen(js_name = genderRatio)]
pub fn gender_ratio_wasm(gender_rate: i32) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&GenderRatio::from_rate(gender_rate)).map_err(js_err)
}

#[wasm_bindgen(js_name = pokemonAbilities)]
pub fn pokemon_abilities_wasm(record: JsValue) -> Result<JsValue, JsValue> {
    let record: PokemonRecord = serde_wasm_bindgen::from_value(record).map_err(js_err)?;
    serde_wasm_bindgen::to_value(&extract_abilities(&record)).map_err(js_err)
}

/// Chat messages for a matchup; the page forwards them to its own
/// text-generation endpoint.
#[wasm_bindgen(js_name = matchupMessages)]
pub fn matchup_messages_wasm(mine: JsValue, opponent: JsValue) -> Result<JsValue, JsValue> {
    let mine: MatchupSideWire = serde_wasm_bindgen::from_value(mine).map_err(js_err)?;
    let opponent: MatchupSideWire = serde_wasm_bindgen::from_value(opponent).map_err(js_err)?;
    mine.loadout.evs.validate().map_err(js_err)?;
    opponent.loadout.evs.validate().map_err(js_err)?;
    let messages = build_matchup_messages(
        MatchupSide::new(&mine.loadout, &mine.record),
        MatchupSide::new(&opponent.loadout, &opponent.record),
    );
    serde_wasm_bindgen::to_value(&messages).map_err(js_err)
}
